use clap::Parser;
use fdiff::domain::areas::comparator::{Comparator, DiffOptions};
use fdiff::domain::areas::source::Source;
use fdiff::domain::objects::normalize::NormalizeOptions;

#[derive(Parser)]
#[command(
    name = "fdiff",
    version = "0.1.0",
    about = "Compare files line by line",
    long_about = "This command compares two files line by line and prints an ed-style \
    change script describing the edits that turn the first file into the second. \
    Either file may be given as '-' to read from standard input.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The first file to compare, or '-' for standard input")]
    file1: String,
    #[arg(index = 2, help = "The second file to compare, or '-' for standard input")]
    file2: String,
    #[arg(short = 'q', long = "brief", help = "Report only when files differ")]
    brief: bool,
    #[arg(
        short = 's',
        long = "report-identical-files",
        help = "Report when two files are identical"
    )]
    report_identical: bool,
    #[arg(
        short = 'b',
        long = "ignore-space-change",
        help = "Ignore changes in the amount of white space"
    )]
    ignore_space: bool,
    #[arg(
        short = 'i',
        long = "ignore-case",
        help = "Ignore case differences in file contents"
    )]
    ignore_case: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = DiffOptions::new(
        cli.brief,
        cli.report_identical,
        NormalizeOptions::new(cli.ignore_case, cli.ignore_space),
    );
    let comparator = Comparator::new(options, Box::new(std::io::stdout()));

    let a = Source::from_operand(&cli.file1);
    let b = Source::from_operand(&cli.file2);

    match comparator.diff(&a, &b) {
        Ok(status) => std::process::exit(status.code()),
        Err(error) => {
            eprintln!("fdiff: {error}");
            std::process::exit(2);
        }
    }
}
