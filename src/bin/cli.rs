use fenboard::board::{Board, START_FEN, castle_glyphs};
use fenboard::logger::{LogSink, init_logging};
use fenboard::session::{ClickOutcome, Session, SessionOptions};
use fenboard::snapshot::{FrameSnapshot, SessionRecord};
use fenboard::square::Square;
use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;

const DEFAULT_FILTER: &str = "fenboard=info";

struct CliConfig {
    fen: String,
    echo: bool,
    log_file: Option<PathBuf>,
    filter: String,
}

fn parse_arg_str(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_config(args: &[String]) -> CliConfig {
    CliConfig {
        fen: parse_arg_str(args, "--fen").unwrap_or_else(|| START_FEN.to_string()),
        echo: args.iter().any(|a| a == "--echo"),
        log_file: parse_arg_str(args, "--log-file").map(PathBuf::from),
        filter: parse_arg_str(args, "--filter").unwrap_or_else(|| DEFAULT_FILTER.to_string()),
    }
}

fn print_usage() {
    println!("usage: fenboard [--fen <fen>] [--echo] [--log-file <path>] [--filter <directives>]");
    println!();
    println!("commands:");
    println!("  click <square>          click a square (index 0-63 or name like e2)");
    println!("  <square>                same as click");
    println!("  cancel                  drop a held piece and clear the selection");
    println!("  position startpos       load the starting position");
    println!("  position fen <fen>      load an arbitrary position");
    println!("  fen                     print the placement encoding");
    println!("  d | display             draw the board");
    println!("  state                   print side to move, rights and selection");
    println!("  save <path>             write the session to a file");
    println!("  load <path>             restore a session from a file");
    println!("  quit");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let config = parse_config(&args);
    let sink = match &config.log_file {
        Some(path) => LogSink::File(path.clone()),
        None => LogSink::Stderr,
    };
    if let Err(e) = init_logging(sink, &config.filter) {
        eprintln!("{}", e);
    }

    let mut session = Session::with_options(
        &config.fen,
        SessionOptions {
            echo_fen: config.echo,
        },
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };

        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts[0];

        match command {
            "click" => match parts.get(1) {
                Some(arg) => handle_click(&mut session, arg, config.echo),
                None => println!("error: click needs a square"),
            },
            "cancel" => session.cancel(),
            "position" => handle_position(&mut session, &parts),
            "fen" => println!("{}", session.fen()),
            "d" | "display" => print!("{}", render_text(&FrameSnapshot::capture(&session))),
            "state" => print_state(&session),
            "save" => match parts.get(1) {
                Some(path) => {
                    if let Err(e) = save_session(&session, path) {
                        println!("error: {}", e);
                    }
                }
                None => println!("error: save needs a path"),
            },
            "load" => match parts.get(1) {
                Some(path) => match load_session(path, session.options()) {
                    Ok(restored) => session = restored,
                    Err(e) => println!("error: {}", e),
                },
                None => println!("error: load needs a path"),
            },
            "help" => print_usage(),
            "quit" | "exit" => break,
            other => handle_click(&mut session, other, config.echo),
        }
    }
}

fn handle_click(session: &mut Session, arg: &str, echo: bool) {
    let square = match arg.parse::<Square>() {
        Ok(sq) => sq,
        Err(e) => {
            println!("error: {}", e);
            return;
        }
    };

    match session.click(square) {
        ClickOutcome::Selected(sq) => println!("selected {} ({})", sq, sq.index()),
        ClickOutcome::PickedUp { square, code } => {
            let glyph = session
                .board()
                .piece_at(square)
                .and_then(|p| p.glyph())
                .unwrap_or('?');
            println!("picked up {} on {} (code {})", glyph, square, code);
        }
        ClickOutcome::Moved { from, to, fen } => {
            println!("moved {} -> {}", from, to);
            // With --echo the session already printed the encoding.
            if !echo {
                println!("{}", fen);
            }
        }
    }
}

fn handle_position(session: &mut Session, parts: &[&str]) {
    match parts.get(1) {
        Some(&"startpos") => session.reset(),
        Some(&"fen") if parts.len() > 2 => session.load_fen(&parts[2..].join(" ")),
        _ => println!("error: expected 'position startpos' or 'position fen <fen>'"),
    }
}

fn print_state(session: &Session) {
    let board: &Board = session.board();
    println!("side to move: {}", board.side_to_move);
    println!("castling: {}", castle_glyphs(board.castling_rights));
    match session.selected() {
        Some(sq) => println!("selected: {} ({})", sq, sq.index()),
        None => println!("selected: -"),
    }
    println!("state: {:?}", session.state());
}

/// Text diagram of one frame. Empty light squares print `.`, dark ones `:`,
/// the highlighted square is bracketed.
fn render_text(frame: &FrameSnapshot) -> String {
    let mut out = String::new();
    for rank in 0..8u8 {
        out.push_str(&format!("{} ", 8 - rank));
        for file in 0..8u8 {
            let sq = Square::from_coords(file, rank);
            let cell = match fenboard::board::Piece::from_code(frame.code_at(sq)) {
                Some(piece) => match piece.glyph() {
                    Some(g) => g,
                    None if sq.is_light() => '.',
                    None => ':',
                },
                None => '?',
            };
            if frame.is_highlighted(sq) {
                out.push_str(&format!("[{}]", cell));
            } else {
                out.push_str(&format!(" {} ", cell));
            }
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out
}

fn save_session(session: &Session, path: &str) -> Result<(), String> {
    let bytes = SessionRecord::capture(session).to_bytes()?;
    std::fs::write(path, bytes).map_err(|e| format!("cannot write {}: {}", path, e))
}

fn load_session(path: &str, options: SessionOptions) -> Result<Session, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
    Ok(SessionRecord::from_bytes(&bytes)?.restore_with(options))
}
