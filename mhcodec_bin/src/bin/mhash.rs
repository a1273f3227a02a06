use clap::{Parser, Subcommand};
use log::{debug, info};
use mhcodec::{registry, text, Base, HashFunction, Multihash};

/// Create and inspect multihashes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hash the input and print the multihash
    Hash {
        /// Hash function name, e.g. sha2-256
        algorithm: HashFunction,
        input: String,
        /// Treat the input as hex-encoded bytes instead of text
        #[arg(long)]
        hex_input: bool,
        /// Keep only this many leading digest bytes
        #[arg(short, long)]
        length: Option<usize>,
        #[arg(short, long, default_value = "base16")]
        base: Base,
        /// Prefix the output with its multibase character
        #[arg(short, long)]
        multibase: bool,
    },
    /// Wrap an existing hex digest under a function code or name
    Wrap {
        /// Function name or numeric code (0x-prefixed hex or decimal)
        function: String,
        digest: String,
        #[arg(short, long)]
        length: Option<usize>,
        #[arg(short, long, default_value = "base16")]
        base: Base,
        #[arg(short, long)]
        multibase: bool,
    },
    /// Decode a multihash and print its parts
    Decode {
        input: String,
        /// Encoding of INPUT when it has no multibase prefix
        #[arg(short, long, default_value = "base16")]
        base: Base,
        /// INPUT starts with a multibase prefix character
        #[arg(short, long)]
        multibase: bool,
    },
    /// List the known hash functions
    List,
}

fn parse_code(function: &str) -> Result<u64, Box<dyn std::error::Error>> {
    if let Some(hex_code) = function.strip_prefix("0x") {
        return Ok(u64::from_str_radix(hex_code, 16)?);
    }
    if let Ok(code) = function.parse::<u64>() {
        return Ok(code);
    }
    Ok(registry::code_for_name(function)?)
}

fn render(mh: &Multihash, base: Base, multibase: bool) -> String {
    if multibase {
        mh.to_multibase(base)
    } else {
        mh.to_string_in(base)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    debug!("{:?}", args);

    match args.command {
        Command::Hash { algorithm, input, hex_input, length, base, multibase } => {
            let bytes = if hex_input { hex::decode(&input)? } else { input.into_bytes() };
            info!("Hashing {} bytes with {}", bytes.len(), algorithm);
            let mh = Multihash::hash(algorithm, &bytes, length)?;
            println!("{}", render(&mh, base, multibase));
        }
        Command::Wrap { function, digest, length, base, multibase } => {
            let code = parse_code(&function)?;
            let digest = hex::decode(digest)?;
            let mh = Multihash::wrap_truncated(code, &digest, length)?;
            println!("{}", render(&mh, base, multibase));
        }
        Command::Decode { input, base, multibase } => {
            let bytes = if multibase {
                text::from_multibase(&input)?.1
            } else {
                text::decode(base, &input)?
            };
            let decoded = mhcodec::decode(&bytes)?;
            println!("code:   0x{:x}", decoded.code);
            println!("name:   {}", decoded.name.unwrap_or("-"));
            println!("length: {}", decoded.length);
            println!("digest: {}", hex::encode(&decoded.digest));
        }
        Command::List => {
            for f in HashFunction::all() {
                let len = f.default_length().map_or("-".to_string(), |l| l.to_string());
                println!("0x{:02x}\t{}\t{}", f.code(), f.name(), len);
            }
        }
    }

    Ok(())
}
