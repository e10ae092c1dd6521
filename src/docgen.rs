use rlistview::{BlockDocument, DocumentWriter, VirtualDocumentReader};
use anyhow::Result;
use std::env;

struct Config {
    num_roots: usize,
    max_depth: usize,
    max_children: usize,
    seed: u64,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_roots: 8,
            max_depth: 4,
            max_children: 6,
            seed: 42,
            output_file: None,
            use_brotli: false,
        }
    }
}

/// Reads the value following flag `args[*i]`, advancing `i`.
fn flag_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str> {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.as_str()),
        None => anyhow::bail!("{} requires an argument", flag),
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-roots" => config.num_roots = flag_value(&args, &mut i)?.parse()?,
            "-depth" => config.max_depth = flag_value(&args, &mut i)?.parse()?,
            "-children" => config.max_children = flag_value(&args, &mut i)?.parse()?,
            "-seed" => config.seed = flag_value(&args, &mut i)?.parse()?,
            "-out" | "-o" => config.output_file = Some(flag_value(&args, &mut i)?.to_string()),
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                log::warn!("Unknown argument: {}", other);
            }
        }
        i += 1;
    }

    if config.num_roots == 0 {
        anyhow::bail!("-roots must be at least 1");
    }

    Ok(config)
}

fn print_help() {
    println!("Block Document Generator");
    println!("Usage: listview-gen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -roots <N>             Maximum number of top-level blocks (default: 8)");
    println!("  -depth <N>             Maximum nesting depth (default: 4)");
    println!("  -children <N>          Maximum inner blocks per container (default: 6)");
    println!("  -seed <N>              Random seed (default: 42)");
    println!("  -out, -o <FILE>        Output file path (default: document.blocks)");
    println!("  -brotli                Write compressed output using Brotli (appends .br if missing)");
    println!("  -h, -help, --help      Show this help message");
}

/// Resolves the output file. With `-brotli`, the `.br` suffix that turns on
/// compression in `DocumentWriter` is added when missing.
fn output_path(config: &Config) -> String {
    let path = config.output_file.clone()
        .unwrap_or_else(|| "document.blocks".to_string());

    if config.use_brotli && !path.ends_with(".br") {
        let compressed = format!("{}.br", path);
        if config.output_file.is_some() {
            log::warn!("-brotli given; writing {} instead of {}", compressed, path);
        }
        compressed
    } else {
        path
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = parse_args()?;

    let output_path = output_path(&config);

    let document = VirtualDocumentReader::with_config(
        config.num_roots,
        config.max_depth,
        config.max_children,
        config.seed,
    )
    .generate();

    let mut writer = DocumentWriter::new(&output_path)?;
    writer.write_document(&document)?;
    writer.flush()?;

    println!("Wrote {} blocks to: {}", document.block_count(), output_path);

    Ok(())
}
