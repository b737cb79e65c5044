//! Simple command that prints one or '-n count' ascending UUID strings

use std::{env, io, io::Write, process::ExitCode};
use uuid4asc::Format;

fn main() -> io::Result<ExitCode> {
    let (count, format) = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [-f hex|grouped|full|urn|enc32|enc64]",
                    program.as_deref().unwrap_or("uuid4asc")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..count {
        let mut e = uuid4asc::uuid_asc();
        writeln!(buf, "{}", e.format(format).expect("textual format"))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(usize, Format), String> {
    let mut count = None;
    let mut format = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
            }
            "-f" => {
                if format.is_some() {
                    return Err("option 'f' given more than once".to_owned());
                }
                let Some(f_arg) = args.next() else {
                    return Err("argument to option 'f' missing".to_owned());
                };
                format.replace(match f_arg.as_str() {
                    "hex" => Format::HexShort,
                    "grouped" => Format::HexGrouped,
                    "full" => Format::HexFull,
                    "urn" => Format::Urn,
                    "enc32" => Format::Enc32,
                    "enc64" => Format::Enc64,
                    _ => return Err(format!("invalid argument to option 'f': '{}'", f_arg)),
                });
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok((
        count.unwrap_or(1),
        format.unwrap_or(Format::HexGrouped),
    ))
}
