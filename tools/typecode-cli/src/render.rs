//! Render command - format hex bytes according to a type descriptor
//!
//! Pointer kinds (`*`, `@`, `#`, ...) are resolved against an optional memory
//! image given with `--memory`, mapped at `--base`. Object descriptions can be
//! supplied with `--object ADDR=TEXT`.

use anyhow::{Context, Result, anyhow, bail};
use clap::Args;
use typecode_core::config;
use typecode_core::debug::{FormatError, LinearMemory, try_render_with};

/// Arguments for the render command
#[derive(Args)]
pub struct RenderArgs {
    /// Type descriptor, e.g. `i`, `{?=dd}`, `[16c]`
    pub descriptor: String,

    /// Value bytes as hex in memory order (spaces, `_` and a `0x` prefix are ignored)
    pub bytes: String,

    /// Memory image (hex) that pointer values are resolved against
    #[arg(long)]
    pub memory: Option<String>,

    /// Address of the first byte of the memory image
    #[arg(long, default_value = "0", value_parser = parse_address)]
    pub base: usize,

    /// Description for the object at an address, as `ADDR=TEXT` (repeatable)
    #[arg(long = "object", value_parser = parse_object)]
    pub objects: Vec<(usize, String)>,

    /// Decimal separator (defaults to the configured locale)
    #[arg(long)]
    pub decimal_separator: Option<char>,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let bytes = parse_hex(&args.bytes).context("Invalid value bytes")?;
    let memory = match &args.memory {
        Some(image) => parse_hex(image).context("Invalid memory image")?,
        None => Vec::new(),
    };

    tracing::debug!(
        "Memory image: {} bytes at {:#x}, {} object description(s)",
        memory.len(),
        args.base,
        args.objects.len()
    );

    let separator = args
        .decimal_separator
        .unwrap_or(config::shared().locale.decimal_separator);
    tracing::debug!("Decimal separator: {:?}", separator);

    let mut host = LinearMemory::new(args.base, &memory).with_decimal_separator(separator);
    for (address, description) in args.objects {
        host = host.with_object(address, description);
    }

    match try_render_with(&args.descriptor, &bytes, &host) {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(FormatError::Unrecognized(descriptor)) => {
            bail!("Unknown type descriptor: {}", descriptor)
        }
        Err(err) => Err(err.into()),
    }
}

/// Decode hex text, tolerating a `0x` prefix and separators
fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();
    Ok(hex::decode(cleaned)?)
}

/// Parse an address in decimal or `0x` hex
fn parse_address(text: &str) -> Result<usize> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => usize::from_str_radix(digits, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| anyhow!("invalid address '{}': {}", text, e))
}

fn parse_object(text: &str) -> Result<(usize, String)> {
    let (address, description) = text
        .split_once('=')
        .ok_or_else(|| anyhow!("expected ADDR=TEXT, got '{}'", text))?;
    Ok((parse_address(address)?, description.to_string()))
}
