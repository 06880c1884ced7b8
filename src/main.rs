use std::io;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};
use colored::Colorize;
use log::{info, warn};

use pretty_input::{
    Logging, OptionValue, Options, PROJECT_NAME, PROJECT_VERSION, set_option,
    show_configuration,
    tui::{
        Bubble, Color, Select, Shape, TerminalConsole, TextInput, Theme, float_prompt,
        integer_prompt, print_bubble, warning_bubble,
    },
};

#[derive(Parser)]
#[command(version = PROJECT_VERSION, about, long_about = None)]
pub struct UserArgs {
    #[command(subcommand)]
    command: Command,

    /// Verbose
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colors for this run
    #[arg(long, global = true)]
    no_colors: bool,

    /// Bubble shape for this run
    #[arg(long, global = true, value_enum)]
    shape: Option<Shape>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a text bubble
    Bubble {
        text: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long, value_enum, default_value_t = Color::Green)]
        color: Color,
        /// Draw the `│>` input decorator below the bubble
        #[arg(long)]
        input_decorator: bool,
    },

    /// Print a warning bubble
    Warn { message: String },

    /// Ask for a line of text
    Text {
        #[command(flatten)]
        input: TextArgs,
        /// Echo `*` instead of the typed characters
        #[arg(long)]
        hidden: bool,
    },

    /// Ask for a line of text without echoing it
    Hidden(TextArgs),

    /// Ask for a whole number
    #[command(visible_alias = "integer")]
    Int {
        question: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long, allow_hyphen_values = true, default_value_t = i64::MIN)]
        min: i64,
        #[arg(long, allow_hyphen_values = true, default_value_t = i64::MAX)]
        max: i64,
    },

    /// Ask for a decimal number
    Float {
        question: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long, allow_hyphen_values = true, default_value_t = f64::MIN)]
        min: f64,
        #[arg(long, allow_hyphen_values = true, default_value_t = f64::MAX)]
        max: f64,
    },

    /// Pick one of several options with the arrow keys
    #[command(visible_alias = "select")]
    Choice {
        question: String,
        #[arg(required = true)]
        items: Vec<String>,
        #[arg(long)]
        label: Option<String>,
        /// Initially highlighted option, 1-based
        #[arg(long, default_value_t = 1)]
        start: usize,
        #[arg(long)]
        no_instructions: bool,
    },

    /// Show or change stored options
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
struct TextArgs {
    question: String,
    #[arg(long)]
    label: Option<String>,
    /// Shortest accepted answer, in characters
    #[arg(long, default_value_t = 1)]
    min: usize,
    /// Longest accepted answer, in characters
    #[arg(long)]
    max: Option<usize>,
}

impl TextArgs {
    fn text_input(&self) -> TextInput<'_> {
        let input = TextInput::new(&self.question).maybe_label(self.label.as_deref());
        match self.max {
            Some(max) => input.with_length(self.min, max),
            None if self.min != 1 => input.with_length(self.min, usize::MAX),
            None => input,
        }
    }
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show stored options
    Show,
    /// Store an option, e.g. `config set text_bubble_shape Square`
    Set { name: String, value: String },
}

impl UserArgs {
    /// Rejects `--min` above `--max`, which no answer could satisfy.
    fn check_bounds(&self) -> Result<(), clap::Error> {
        let bounds = match &self.command {
            Command::Text { input, .. } | Command::Hidden(input) => input
                .max
                .filter(|max| input.min > *max)
                .map(|max| (input.min.to_string(), max.to_string())),
            Command::Int { min, max, .. } if min > max => {
                Some((min.to_string(), max.to_string()))
            }
            Command::Float { min, max, .. } if min > max => {
                Some((min.to_string(), max.to_string()))
            }
            _ => None,
        };

        match bounds {
            Some((min, max)) => Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!("--min ({min}) must not be greater than --max ({max})"),
            )),
            None => Ok(()),
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    if verbose {
        Logging::new().with_debug_mode(true).start()
    } else {
        let file_name = format!("{PROJECT_NAME}.log");
        Logging::new().with_file(file_name).start()
    }
}

/// Stored options with this run's command line overrides applied.
fn resolve_options(args: &UserArgs) -> Result<Options> {
    let mut options = Options::load()?;

    if args.no_colors {
        options.set("no_colors", OptionValue::Bool(true))?;
    }
    if let Some(shape) = args.shape {
        options.set("text_bubble_shape", OptionValue::Shape(shape))?;
    }

    Ok(options)
}

fn run(command: &Command, options: &Options) -> Result<()> {
    match command {
        Command::Bubble {
            text,
            label,
            color,
            input_decorator,
        } => {
            let bubble = Bubble::builder()
                .text(text)
                .maybe_label(label.as_deref())
                .color(*color)
                .input_decorator(*input_decorator)
                .build();
            print_bubble(&bubble, options);
        }
        Command::Warn { message } => {
            println!("{}", warning_bubble(message, &Theme::default(), options));
        }
        Command::Text { input, hidden } => {
            let mut console = TerminalConsole::terminal(options);
            let mut text_input = input.text_input();
            if *hidden {
                text_input = text_input.hidden();
            }
            println!("{}", text_input.prompt(&mut console)?);
        }
        Command::Hidden(input) => {
            let mut console = TerminalConsole::terminal(options);
            println!("{}", input.text_input().hidden().prompt(&mut console)?);
        }
        Command::Int {
            question,
            label,
            min,
            max,
        } => {
            let value = integer_prompt(question, label.as_deref(), *min, *max, options)?;
            println!("{value}");
        }
        Command::Float {
            question,
            label,
            min,
            max,
        } => {
            let value = float_prompt(question, label.as_deref(), *min, *max, options)?;
            println!("{value}");
        }
        Command::Choice {
            question,
            items,
            label,
            start,
            no_instructions,
        } => {
            let mut console = TerminalConsole::terminal(options);
            let mut select = Select::new(question, items.iter().map(String::as_str).collect())
                .maybe_label(label.as_deref())
                .with_starting_cursor(*start);
            if *no_instructions {
                select = select.without_instructions();
            }
            let index = select.prompt(&mut console)?;
            println!("{index}");
        }
        Command::Config(ConfigCommand::Show) => show_configuration()?,
        Command::Config(ConfigCommand::Set { name, value }) => {
            set_option(name, value).with_context(|| format!("Unable to set option {name}"))?;
        }
    }

    Ok(())
}

fn is_interrupted(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::Interrupted)
}

fn main() -> Result<()> {
    let args = UserArgs::parse();
    if let Err(e) = args.check_bounds() {
        e.exit();
    }

    init_logging(args.verbose)?;

    let options = resolve_options(&args)?;
    info!("{PROJECT_NAME} {PROJECT_VERSION} starting");

    match run(&args.command, &options) {
        Err(e) if is_interrupted(&e) => {
            warn!("prompt interrupted");
            eprintln!("{}", "Cancelled".yellow());
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> UserArgs {
        UserArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        UserArgs::command().debug_assert();
    }

    #[test]
    fn test_hidden_subcommand() {
        let args = parse(&["pretty-input", "hidden", "Password?", "--min", "8"]);

        let Command::Hidden(input) = &args.command else {
            panic!("expected the hidden subcommand");
        };
        assert_eq!(input.question, "Password?");
        assert_eq!(input.min, 8);
        assert_eq!(input.max, None);
        assert!(args.check_bounds().is_ok());
    }

    #[test]
    fn test_text_min_above_max_is_rejected() {
        let args = parse(&["pretty-input", "text", "Name?", "--min", "5", "--max", "3"]);
        let err = args.check_bounds().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert!(err.to_string().contains("--min (5)"));
    }

    #[test]
    fn test_numeric_min_above_max_is_rejected() {
        let int = parse(&["pretty-input", "int", "Age?", "--min", "10", "--max", "2"]);
        assert!(int.check_bounds().is_err());

        let float = parse(&["pretty-input", "float", "Ratio?", "--min", "1.5", "--max", "-1"]);
        assert!(float.check_bounds().is_err());

        let ok = parse(&["pretty-input", "int", "Age?", "--min", "-3", "--max", "-3"]);
        assert!(ok.check_bounds().is_ok());
    }

    #[test]
    fn test_equal_text_bounds_are_accepted() {
        let args = parse(&["pretty-input", "hidden", "Pin?", "--min", "4", "--max", "4"]);
        assert!(args.check_bounds().is_ok());
    }
}
