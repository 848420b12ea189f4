use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;

use fcompare::common::io_error_msg;
use fcompare::compare::{
    self, CompareConfig, CompareError, CompareMode, DiffBlock, DiffContext, Outcome,
};
use fcompare::lines::LineSeq;

struct Cli {
    config: CompareConfig,
    /// /A: show only the first and last line of each difference set.
    abbreviate: bool,
    files: Vec<String>,
}

fn usage_error(msg: &str) -> ! {
    eprintln!("ffc: {}", msg);
    eprintln!("Try 'ffc --help' for more information.");
    process::exit(-1);
}

/// Apply one switch (without its `/` or `-` prefix). Returns false when
/// the text is not a recognized switch, so `/`-prefixed path names can
/// fall through to the operand list.
fn parse_switch(cli: &mut Cli, opt: &str, binary_seen: &mut bool, text_seen: &mut bool) -> bool {
    match opt.to_ascii_uppercase().as_str() {
        "A" => cli.abbreviate = true,
        "B" => {
            cli.config.mode = CompareMode::Binary;
            *binary_seen = true;
        }
        "L" => {
            cli.config.mode = CompareMode::TextAscii;
            *text_seen = true;
        }
        "U" => {
            cli.config.mode = CompareMode::TextUnicode;
            *text_seen = true;
        }
        "C" => cli.config.ignore_case = true,
        "W" => cli.config.ignore_whitespace = true,
        "N" => cli.config.show_line_numbers = true,
        "T" => cli.config.preserve_raw_tabs = true,
        // Accepted for command-line compatibility; offline file
        // attributes do not exist on this platform.
        "OFF" | "OFFLINE" => {}
        "?" => {
            print_help();
            process::exit(0);
        }
        upper => {
            if let Some(num) = upper.strip_prefix("LB") {
                match num.parse::<usize>() {
                    Ok(n) if n >= 1 => cli.config.buffer_lines = n,
                    _ => usage_error(&format!("invalid buffer size '{}'", num)),
                }
            } else if !upper.is_empty() && upper.bytes().all(|b| b.is_ascii_digit()) {
                match upper.parse::<usize>() {
                    Ok(n) if n >= 1 => cli.config.resync_lines = n,
                    _ => usage_error(&format!("invalid resync count '{}'", upper)),
                }
            } else {
                return false;
            }
        }
    }
    true
}

fn parse_args() -> Cli {
    let mut cli = Cli {
        config: CompareConfig::default(),
        abbreviate: false,
        files: Vec::new(),
    };
    let mut binary_seen = false;
    let mut text_seen = false;

    let mut args = std::env::args().skip(1);
    #[allow(clippy::while_let_on_iterator)]
    while let Some(arg) = args.next() {
        if arg == "--" {
            cli.files.extend(args);
            break;
        }
        match arg.as_bytes() {
            b"--help" => {
                print_help();
                process::exit(0);
            }
            b"--version" => {
                println!("fc (fcompare) {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            [b'-', rest @ ..] if !rest.is_empty() => {
                // A '-' prefix is always a switch.
                if !parse_switch(&mut cli, &arg[1..], &mut binary_seen, &mut text_seen) {
                    usage_error(&format!("invalid switch '{}'", arg));
                }
            }
            [b'/', rest @ ..] if !rest.is_empty() => {
                // A '/' prefix is a switch when it parses as one;
                // otherwise it is an absolute path.
                if !parse_switch(&mut cli, &arg[1..], &mut binary_seen, &mut text_seen) {
                    cli.files.push(arg);
                }
            }
            _ => cli.files.push(arg),
        }
    }

    if binary_seen && text_seen {
        usage_error("/B cannot be combined with /L or /U");
    }
    cli
}

fn print_help() {
    print!(
        "Usage: ffc [OPTION]... FILE1 FILE2\n\
         Compare two files and display the differences between them.\n\n\
         \x20 /A       display only first and last lines for each set\n\
         \x20          of differences\n\
         \x20 /B       compare the files byte-for-byte\n\
         \x20 /L       compare the files as ASCII text\n\
         \x20 /U       compare the files as Unicode text\n\
         \x20 /C       ignore case when matching lines\n\
         \x20 /W       ignore spaces and tabs when matching lines\n\
         \x20 /N       display line numbers in text output\n\
         \x20 /T       do not expand tabs to spaces\n\
         \x20 /OFF[LINE]  accepted for compatibility, no effect here\n\
         \x20 /nnnn    consecutive matching lines required to\n\
         \x20          resynchronize after a difference (default 2)\n\
         \x20 /LBn     line buffer hint (default 100)\n\
         \x20     --help     display this help and exit\n\
         \x20     --version  output version information and exit\n\n\
         Switches may also be written with a leading '-' and are\n\
         case-insensitive. With no mode switch the file contents decide\n\
         between text and binary comparison.\n"
    );
}

/// Right-aligned 1-based line number, fc's /N column shape.
fn write_line(
    out: &mut impl Write,
    seq: &LineSeq,
    index: usize,
    numbered: bool,
) -> io::Result<()> {
    if numbered {
        let mut num_buf = itoa::Buffer::new();
        let num = num_buf.format(index + 1);
        for _ in num.len()..5 {
            out.write_all(b" ")?;
        }
        out.write_all(num.as_bytes())?;
        out.write_all(b":  ")?;
    }
    out.write_all(&seq.line(index).text)?;
    out.write_all(b"\n")
}

/// One side of a difference section: the last line that matched before
/// the gap, the gap itself (optionally abbreviated), and the line the
/// files resynchronize on afterward.
fn render_side(
    out: &mut impl Write,
    seq: &LineSeq,
    start: usize,
    end: usize,
    numbered: bool,
    abbreviate: bool,
) -> io::Result<()> {
    if start > 0 {
        write_line(out, seq, start - 1, numbered)?;
    }
    if abbreviate && end - start > 2 {
        write_line(out, seq, start, numbered)?;
        writeln!(out, "...")?;
        write_line(out, seq, end - 1, numbered)?;
    } else {
        for index in start..end {
            write_line(out, seq, index, numbered)?;
        }
    }
    if end < seq.len() {
        write_line(out, seq, end, numbered)?;
    }
    Ok(())
}

fn render_block(
    out: &mut impl Write,
    ctx: &DiffContext<'_>,
    block: &DiffBlock,
    abbreviate: bool,
) -> io::Result<()> {
    match *block {
        DiffBlock::Lines {
            a_start,
            a_end,
            b_start,
            b_end,
            ..
        } => {
            writeln!(out, "***** {}", ctx.path_a.display())?;
            if let Some(seq) = ctx.lines_a {
                render_side(out, seq, a_start, a_end, ctx.show_line_numbers, abbreviate)?;
            }
            writeln!(out, "***** {}", ctx.path_b.display())?;
            if let Some(seq) = ctx.lines_b {
                render_side(out, seq, b_start, b_end, ctx.show_line_numbers, abbreviate)?;
            }
            writeln!(out, "*****")?;
            writeln!(out)
        }
        DiffBlock::Bytes {
            offset,
            byte_a,
            byte_b,
        } => {
            writeln!(out, "{:08X}: {:02X} {:02X}", offset, byte_a, byte_b)
        }
        DiffBlock::Size { size_a, size_b } => {
            if size_a > size_b {
                writeln!(
                    out,
                    "FC: {} longer than {}",
                    ctx.path_a.display(),
                    ctx.path_b.display()
                )
            } else {
                writeln!(
                    out,
                    "FC: {} longer than {}",
                    ctx.path_b.display(),
                    ctx.path_a.display()
                )
            }
        }
    }
}

fn main() {
    fcompare::common::reset_sigpipe();

    let cli = parse_args();
    if cli.files.is_empty() {
        usage_error("missing operand");
    }
    if cli.files.len() == 1 {
        usage_error(&format!("missing operand after '{}'", cli.files[0]));
    }
    if cli.files.len() > 2 {
        usage_error(&format!("extra operand '{}'", cli.files[2]));
    }

    let path_a = Path::new(&cli.files[0]);
    let path_b = Path::new(&cli.files[1]);
    let abbreviate = cli.abbreviate;

    let stdout = io::stdout();
    let mut out = BufWriter::with_capacity(256 * 1024, stdout.lock());
    let mut write_err: Option<io::Error> = None;

    if let Err(e) = writeln!(out, "Comparing files {} and {}", cli.files[0], cli.files[1]) {
        write_err = Some(e);
    }

    let result = compare::compare(path_a, path_b, &cli.config, &mut |ctx, block| {
        if write_err.is_some() {
            return;
        }
        if let Err(e) = render_block(&mut out, ctx, block, abbreviate) {
            write_err = Some(e);
        }
    });

    let code = match result {
        Ok(Outcome::Identical) => {
            if write_err.is_none() {
                if let Err(e) = writeln!(out, "FC: no differences encountered") {
                    write_err = Some(e);
                }
            }
            0
        }
        Ok(Outcome::Different) => 1,
        Err(CompareError::Io { path, source }) => {
            eprintln!("ffc: {}: {}", path.display(), io_error_msg(&source));
            2
        }
        Err(e @ CompareError::Memory(_)) => {
            eprintln!("ffc: {}", e);
            2
        }
        Err(e @ CompareError::InvalidParameter(_)) => {
            eprintln!("ffc: {}", e);
            process::exit(-1);
        }
    };

    let flushed = match write_err {
        Some(e) => Err(e),
        None => out.flush(),
    };
    if let Err(e) = flushed {
        if e.kind() == io::ErrorKind::BrokenPipe {
            process::exit(code);
        }
        eprintln!("ffc: write error: {}", io_error_msg(&e));
        process::exit(2);
    }
    process::exit(code);
}
