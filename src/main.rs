use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use log::info;
use seahorse::{App, Command, Context, Flag, FlagType};

use time_calculator::add_time;
use time_calculator::input::Batch;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "warn");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use std::path::PathBuf;

    use log::error;
    use seahorse::Context;

    /// Logs the error and exits the process, seahorse actions can not return one.
    pub fn exit_on_error(result: anyhow::Result<()>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .map_err(|_| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name).map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

/// Splits the arguments of the `add` command into start time, duration and
/// the optional starting day.
///
/// The start time may be passed as one argument (`"3:00 PM"`) or as two
/// (`3:00 PM`).
fn split_add_args(args: &[String]) -> anyhow::Result<(String, &str, Option<&str>)> {
    let (start, rest) = match args {
        [start, rest @ ..] if start.contains(' ') => (start.clone(), rest),
        [clock, period, rest @ ..] => (format!("{} {}", clock, period), rest),
        _ => return Err(anyhow::anyhow!("missing start time or duration")),
    };

    match rest {
        [duration] => Ok((start, duration.as_str(), None)),
        [duration, day] => Ok((start, duration.as_str(), Some(day.as_str()))),
        [] => Err(anyhow::anyhow!("missing duration")),
        _ => Err(anyhow::anyhow!("too many arguments")),
    }
}

fn add(context: &Context) -> anyhow::Result<()> {
    let (start, duration, starting_day) = split_add_args(&context.args)?;
    info!(
        "start: \"{}\", duration: \"{}\", starting day: {:?}",
        start, duration, starting_day
    );

    println!("{}", add_time(&start, duration, starting_day)?);

    Ok(())
}

fn batch(context: &Context) -> anyhow::Result<()> {
    let input = context.required_path_flag("input")?;
    let output: Option<PathBuf> = context.required_path_flag("output").ok();

    let batch = Batch::try_from_toml_file(&input)?;
    info!("read {} calculations from \"{}\"", batch.calculations().len(), input.display());

    match output {
        Some(output) => {
            batch.write_json(&output)?;
            info!("wrote results to \"{}\"", output.display());
        }
        None => println!("{}", batch.to_json()?),
    }

    Ok(())
}

fn run() {
    let args: Vec<String> = env::args().collect();

    let add_command = Command::new("add")
        .usage(format!("{} add 3:00 PM 3:10 [Monday]", args[0]))
        .description("Adds the duration to the start time and prints the result.")
        .action(|context: &Context| exit_on_error(add(context)));

    let batch_command = Command::new("batch")
        .usage(format!("{} batch --input calculations.toml [args]", args[0]))
        .description("Evaluates every calculation of a toml file and prints the results as json.")
        .flag(
            Flag::new("input", FlagType::String)
                .description("Path to the toml file with the calculations."),
        )
        .flag(Flag::new("output", FlagType::String).description(
            "[optional] Path to the json file for the results. Default: prints to stdout",
        ))
        .action(|context: &Context| exit_on_error(batch(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(add_command)
        .command(batch_command);

    app.run(args);
}
