//! `dockerfile parse` command: parse a Dockerfile and print its instructions.

use std::io::Read;

use clap::Args;
use dockerfile_core::{EscapeToken, Parser, ParserConfig};

use crate::output;

#[derive(Args)]
pub struct ParseArgs {
    /// Path to the Dockerfile, or `-` to read standard input
    #[arg(default_value = "Dockerfile")]
    pub path: String,

    /// Print the parsed instructions as JSON
    #[arg(long, conflicts_with_all = ["quiet", "format"])]
    pub json: bool,

    /// Only print instruction keywords (one per line)
    #[arg(short, long)]
    pub quiet: bool,

    /// Format output using placeholders: {{.Cmd}}, {{.SubCmd}}, {{.Json}},
    /// {{.Flags}}, {{.Value}}, {{.StartLine}}, {{.Original}}
    #[arg(long)]
    pub format: Option<String>,

    /// Escape token used when the file has no escape directive (\ or `)
    #[arg(long, default_value = "\\")]
    pub escape: EscapeToken,

    /// Ignore `# escape=` parser directives
    #[arg(long)]
    pub no_directives: bool,
}

pub fn execute(args: ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let parser = Parser::new(ParserConfig {
        escape_token: args.escape,
        parse_directives: !args.no_directives,
    });

    let commands = if args.path == "-" {
        let mut content = Vec::new();
        std::io::stdin()
            .read_to_end(&mut content)
            .map_err(|e| format!("Failed to read Dockerfile from stdin: {}", e))?;
        parser.parse_bytes(&content)?
    } else {
        parser.parse_file(&args.path)?
    };
    tracing::debug!(path = args.path.as_str(), instructions = commands.len(), "Parsed");

    // --json: machine-readable output
    if args.json {
        println!("{}", serde_json::to_string_pretty(&commands)?);
        return Ok(());
    }

    // --quiet: print only keywords
    if args.quiet {
        for command in &commands {
            println!("{}", command.cmd());
        }
        return Ok(());
    }

    // --format: custom template output
    if let Some(ref fmt) = args.format {
        for command in &commands {
            println!("{}", output::apply_format(command, fmt));
        }
        return Ok(());
    }

    // Default: table output
    let mut table = output::new_table(&["LINE", "CMD", "SUB_CMD", "JSON", "FLAGS", "VALUE"]);
    for command in &commands {
        table.add_row(vec![
            command.start_line().to_string(),
            command.cmd().to_string(),
            command.sub_cmd().unwrap_or("").to_string(),
            command.is_json().to_string(),
            command.flags().join(" "),
            output::format_value(command),
        ]);
    }

    println!("{table}");
    Ok(())
}
