use std::io::{self, IsTerminal, Write};

use clap::Parser;

use style_guard::cli::Cli;
use style_guard::output::{ColorMode, ErrorOutput, Reporter, VerboseReporter, reporter_for};
use style_guard::scanner::DirectoryScanner;
use style_guard::{EXIT_FATAL, EXIT_SUCCESS, RuleCode, StyleChecker};

fn main() {
    let cli = Cli::parse();

    let exit_code = if cli.list_rules {
        list_rules()
    } else {
        run_check(&cli)
    };

    std::process::exit(exit_code);
}

fn list_rules() -> i32 {
    let mut stdout = io::stdout().lock();
    for code in RuleCode::ALL {
        if writeln!(stdout, "{code}  {}", code.summary()).is_err() {
            return EXIT_FATAL;
        }
    }
    EXIT_SUCCESS
}

fn run_check(cli: &Cli) -> i32 {
    let color = ColorMode::from(cli.color);
    let errors = ErrorOutput::new(color);

    // clap enforces the path unless --list-rules was given.
    let Some(path) = cli.check.path.as_deref() else {
        return EXIT_FATAL;
    };
    let scanner = match DirectoryScanner::from_options(&cli.check.scan_options()) {
        Ok(scanner) => scanner,
        Err(e) => {
            errors.print_fatal(&e);
            return EXIT_FATAL;
        }
    };

    let stdout = io::stdout();
    let use_colors = color.use_colors(stdout.is_terminal());
    let mut reporter: Box<dyn Reporter> = reporter_for(cli.check.format, stdout, use_colors);
    if cli.verbose {
        reporter = Box::new(VerboseReporter::stderr(reporter));
    }

    StyleChecker::new()
        .with_error_colors(color)
        .run_parallel(path, &scanner, &mut reporter)
}
