use std::env;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use reader_layout::{
    CellWidthMeasurer, FixedStyleEnvironment, LayoutConfig, LayoutEngine, Page, PaginationMode,
};
use serde::Serialize;

const IDEOGRAPHIC_SPACE: char = '\u{3000}';

#[derive(Clone, Debug)]
struct Args {
    text_path: String,
    title: Option<String>,
    config: LayoutConfig,
    json: bool,
}

#[derive(Serialize)]
struct PreviewOutput<'a> {
    config: &'a LayoutConfig,
    page_count: usize,
    pages: &'a [Page],
}

fn main() -> ExitCode {
    match run(env::args().collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {}", msg);
            eprintln!("{}", help_text());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    let args = parse_args(args)?;
    let content = std::fs::read_to_string(&args.text_path)
        .map_err(|e| format!("unable to read {}: {}", args.text_path, e))?;

    let mut engine = LayoutEngine::new(Arc::new(CellWidthMeasurer::default()))
        .with_style_environment(Arc::new(FixedStyleEnvironment::new("monospace")));
    let pages = engine
        .layout(&content, args.title.as_deref(), &args.config)
        .map_err(|e| format!("layout failed: {}", e))?;

    if args.json {
        let output = PreviewOutput {
            config: &args.config,
            page_count: pages.len(),
            pages: &pages,
        };
        let encoded = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
        println!("{}", encoded);
    } else {
        print_pages(&pages);
    }
    Ok(())
}

fn print_pages(pages: &[Page]) {
    let total = pages.len();
    for (idx, page) in pages.iter().enumerate() {
        let marker = if page.is_title_page() { " (title)" } else { "" };
        println!("=== page {}/{}{} ===", idx + 1, total, marker);
        for line in &page.lines {
            let justify = if line.center { '|' } else { ' ' };
            if line.paragraph_first {
                println!(
                    "{}{}{}{}",
                    justify, IDEOGRAPHIC_SPACE, IDEOGRAPHIC_SPACE, line.text
                );
            } else {
                println!("{}{}", justify, line.text);
            }
        }
    }
}

fn parse_value<T: FromStr>(args: &[String], i: usize) -> Result<T, String> {
    let flag = &args[i];
    let v = args
        .get(i + 1)
        .ok_or_else(|| format!("{} requires a value", flag))?;
    v.parse::<T>()
        .map_err(|_| format!("invalid {} value '{}'", flag, v))
}

fn parse_args(args: Vec<String>) -> Result<Args, String> {
    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        return Err("a text file is required".to_string());
    }

    let mut out = Args {
        text_path: args[1].clone(),
        title: None,
        config: LayoutConfig::default(),
        json: false,
    };

    // Settings file first so explicit flags override it.
    if let Some(pos) = args.iter().position(|a| a == "--config") {
        let path = args
            .get(pos + 1)
            .ok_or_else(|| "--config requires a value".to_string())?;
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("unable to read {}: {}", path, e))?;
        out.config = LayoutConfig::from_json_str(&json).map_err(|e| e.to_string())?;
    }

    let mut i = 2usize;
    while i < args.len() {
        match args[i].as_str() {
            "--title" => {
                out.title = Some(parse_value::<String>(&args, i)?);
                i += 2;
            }
            "--config" => i += 2,
            "--width" => {
                out.config.width = parse_value(&args, i)?;
                i += 2;
            }
            "--height" => {
                out.config.height = parse_value(&args, i)?;
                i += 2;
            }
            "--padding-h" => {
                out.config.padding_h = parse_value(&args, i)?;
                i += 2;
            }
            "--padding-v" => {
                out.config.padding_v = parse_value(&args, i)?;
                i += 2;
            }
            "--font-size" => {
                out.config.font_size = parse_value(&args, i)?;
                i += 2;
            }
            "--line-height" => {
                out.config.line_height = parse_value(&args, i)?;
                i += 2;
            }
            "--paragraph-gap" => {
                out.config.paragraph_gap = parse_value(&args, i)?;
                i += 2;
            }
            "--title-size" => {
                out.config.title_size = parse_value(&args, i)?;
                i += 2;
            }
            "--title-gap" => {
                out.config.title_gap = parse_value(&args, i)?;
                i += 2;
            }
            "--mode" => {
                let v: String = parse_value(&args, i)?;
                out.config.mode = match v.as_str() {
                    "page" => PaginationMode::Page,
                    "line" => PaginationMode::Line,
                    _ => return Err(format!("invalid --mode value '{}'", v)),
                };
                i += 2;
            }
            "--fast" => {
                out.config.fast = true;
                i += 1;
            }
            "--json" => {
                out.json = true;
                i += 1;
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(out)
}

fn help_text() -> &'static str {
    r#"reader-layout-preview - paginate a text file and print the pages

USAGE:
  cargo run -p reader-layout-preview -- <text_path> [options]

OPTIONS:
  --title <text>         chapter title, shown as the first paragraph
  --config <path>        JSON settings file (flags below override it)
  --width <px>           viewport width (default: 327)
  --height <px>          viewport height (default: 511)
  --padding-h <px>       left/right padding (default: 20)
  --padding-v <px>       top/bottom padding (default: 20)
  --font-size <px>       body font size (default: 20)
  --line-height <ratio>  body line height multiple (default: 1.8)
  --paragraph-gap <px>   gap above paragraphs (default: 16)
  --title-size <px>      title font size (default: 28)
  --title-gap <px>       gap below the title (default: 24)
  --mode <mode>          page|line (default: page)
  --fast                 trust the per-line estimate instead of measuring
  --json                 print pages as JSON

Lines marked with '|' are justified.
"#
}
