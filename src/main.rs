use clap::Parser;
use rpace::convert;
use rpace::expr;

#[derive(Parser)]
#[command(name = "rpace")]
#[command(version)]
#[command(about = "Convert arbitrary distances and times to running paces.", long_about = None)]
#[command(after_help = "Examples:\n  rpace 800m@4:37\n  rpace \"800m @ 4:37\"")]
struct Cli {
    /// Distance-at-time expression (e.g., "800m@4:37")
    input: String,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            if !expr::looks_like_pace_expression(&cli.input) {
                eprintln!("Expected an expression like \"800m@4:37\" or \"1km @ 5:00\"");
            }
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    if cli.json {
        let report = convert::convert_report(&cli.input)?;
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        let pace = convert::convert(&cli.input)?;
        Ok(format!("  {} minutes per mile\n", pace))
    }
}
