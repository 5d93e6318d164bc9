use argh::FromArgs;
use minish::Interpreter;

#[derive(FromArgs)]
/// A minimal interactive command interpreter: reads a line, runs it as a
/// child process, waits for it to finish and prompts again.
struct Options {
    /// prompt displayed before each input line
    #[argh(option, default = "String::from(\"minish> \")")]
    prompt: String,
}

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();
    Interpreter::new(options.prompt).repl()
}
