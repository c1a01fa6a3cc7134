//! Wordle Assist CLI
//!
//! One-shot filtering and ranking from the command line, plus an interactive
//! prompt that keeps a board of guesses.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use wordle_assist::{
    Board, BoardConstraints, BoardError, Candidate, CellState, Distribution, Feedback,
    FeedbackPattern, RankOptions, RankedGuess, RemainingWord, WordleSolver, DEFAULT_CUTOFF,
    DEFAULT_MAX_TURNS, DEFAULT_TOP_N,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

/// Untouched-letter words rarer than this are hidden unless asked for.
const DEFAULT_FRESH_MIN_FREQUENCY: u64 = 100_000;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list with one `word,frequency` entry per line
    #[arg(short, long, env = "WORDLE_CORPUS", default_value = "frequency.txt")]
    corpus: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter the corpus and rank the next guesses
    Filter {
        #[arg(short, long, default_value_t = 5)]
        length: usize,
        /// Known letters by position, `_` for unknown (e.g. `c_a__`)
        #[arg(short, long, default_value = "")]
        pattern: String,
        /// Letters that are not in the word
        #[arg(short = 'x', long, default_value = "")]
        exclude: String,
        /// Letters in the word but not at these 1-indexed positions (e.g. `a:1,3; e:2`)
        #[arg(short, long, default_value = "")]
        misplaced: String,
        /// Also write the matching words to this file
        #[arg(long, value_name = "FILE")]
        dump: Option<PathBuf>,
        #[command(flatten)]
        rank: RankArgs,
    },
    /// Show the feedback a guess gets against an answer
    Feedback { guess: String, answer: String },
    /// Play against a known answer and show each guess
    Solve {
        target: String,
        #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
        max_turns: usize,
        #[command(flatten)]
        rank: RankArgs,
    },
    /// Record guesses one at a time and ask for suggestions (default)
    Interactive {
        #[arg(short, long, default_value_t = 5)]
        length: usize,
        #[command(flatten)]
        rank: RankArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct RankArgs {
    /// Largest pool ranked by weighted entropy; larger pools use letter coverage
    #[arg(long, default_value_t = DEFAULT_CUTOFF)]
    cutoff: usize,
    /// Always rank by weighted entropy
    #[arg(long)]
    no_cutoff: bool,
    /// Number of guesses to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,
    /// Minimum frequency of probe words
    #[arg(long, default_value_t = 0)]
    probe_min_frequency: u64,
    /// Minimum frequency of words built from untouched letters
    #[arg(long, default_value_t = DEFAULT_FRESH_MIN_FREQUENCY)]
    min_frequency: u64,
}

impl Default for RankArgs {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            no_cutoff: false,
            top: DEFAULT_TOP_N,
            probe_min_frequency: 0,
            min_frequency: DEFAULT_FRESH_MIN_FREQUENCY,
        }
    }
}

impl RankArgs {
    fn options(&self) -> RankOptions {
        RankOptions {
            cutoff: (!self.no_cutoff).then_some(self.cutoff),
            top_n: self.top,
            min_frequency: self.probe_min_frequency,
        }
    }
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                print!("\r{} {}", frames[i % frames.len()], message);
                io::stdout().flush().ok();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            print!("\r{}\r", " ".repeat(message.len() + 3));
            io::stdout().flush().ok();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn rank_with_spinner<'a>(
    solver: &'a WordleSolver,
    pool: &[Candidate<'a>],
    distribution: &Distribution,
    options: &RankOptions,
) -> Vec<RankedGuess<'a>> {
    let spinner = Spinner::new("Ranking guesses...");
    let ranked = solver.best_guesses(pool, distribution, options);
    spinner.stop();
    ranked
}

fn print_candidates(results: &[Candidate<'_>], limit: usize) {
    println!("{} matching words", results.len());
    for (i, c) in results.iter().take(limit).enumerate() {
        println!("{:>4} {:>10} {:>12}", i + 1, c.word.to_uppercase(), c.frequency);
    }
    if results.len() > limit {
        println!("     ... {} more", results.len() - limit);
    }
}

fn print_letters(distribution: &Distribution) {
    let letters = distribution.ranked_letters();
    if letters.is_empty() {
        println!("No letters to weigh.");
        return;
    }
    println!("{:>6} {:>14}", "Letter", "Weight");
    for (letter, weight) in letters {
        println!("{:>6} {:>14}", letter.to_ascii_uppercase(), weight);
    }
}

fn print_ranked(ranked: &[RankedGuess<'_>]) {
    if ranked.is_empty() {
        println!("No guesses to suggest.");
        return;
    }
    println!("{:>4} {:>10} {:>12} Possible?", "#", "Word", "Score");
    println!("{}", "-".repeat(40));
    for (i, guess) in ranked.iter().enumerate() {
        println!(
            "{:>4} {:>10} {:>12.3} {}",
            i + 1,
            guess.word.to_uppercase(),
            guess.score,
            if guess.is_candidate { "✓" } else { "probe" }
        );
    }
}

fn print_fresh(words: &[RemainingWord<'_>], limit: usize) {
    if words.is_empty() {
        println!("No words use only untouched letters.");
        return;
    }
    println!("{:>10} {:>12} {:>12}", "Word", "Score", "Frequency");
    for w in words.iter().take(limit) {
        println!("{:>10} {:>12} {:>12}", w.word.to_uppercase(), w.score, w.frequency);
    }
}

/// Parse a colored row such as `gyb_b` against `word`.
fn parse_row(word: &str, colors: &str) -> Option<Vec<(char, CellState)>> {
    if word.chars().count() != colors.chars().count() {
        return None;
    }
    word.chars()
        .zip(colors.chars())
        .map(|(c, s)| match s {
            '_' | '.' | '?' => Some((c, CellState::Ignored)),
            s => Feedback::from_char(s).map(|f| (c, f.into())),
        })
        .collect()
}

struct Session {
    solver: WordleSolver,
    board: Board,
    rank: RankArgs,
}

impl Session {
    fn candidates(&self) -> Result<(BoardConstraints, Vec<Candidate<'_>>), BoardError> {
        let c = self.board.constraints()?;
        let results = self
            .solver
            .filter_words(Some(c.length), &c.pattern, &c.excluded, &c.misplaced);
        Ok((c, results))
    }

    fn print_board(&self) -> Result<(), BoardError> {
        for row in self.board.rows() {
            let letters: String = row.iter().map(|(c, _)| c.to_ascii_uppercase()).collect();
            let colors: String = row
                .iter()
                .map(|(_, s)| match s {
                    CellState::Exact => '🟩',
                    CellState::Present => '🟨',
                    CellState::Absent => '⬛',
                    CellState::Ignored => '⬜',
                })
                .collect();
            println!("  {}  {}", letters, colors);
        }
        let c = self.board.constraints()?;
        println!("Pattern:   {}", c.pattern);
        println!("Excluded:  {}", c.excluded);
        println!("Misplaced: {}", c.misplaced);
        Ok(())
    }

    fn handle(&mut self, parts: &[&str]) -> Result<bool> {
        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => println!("{}", BANNER_TEXT),
            "quit" | "exit" | "q" => return Ok(false),
            "guess" | "g" => {
                let (Some(word), Some(colors)) = (parts.get(1), parts.get(2)) else {
                    println!("Usage: guess <word> <colors>");
                    println!("Example: guess crane gybbb");
                    return Ok(true);
                };
                let Some(row) = parse_row(word, colors) else {
                    println!("Use one of g, y, b or _ per letter.");
                    return Ok(true);
                };
                let before = self.candidates()?.1.len();
                self.board.push_row(row)?;
                if let Err(e) = self.board.constraints() {
                    self.undo();
                    return Err(e.into());
                }
                let (_, results) = self.candidates()?;
                println!("{} → {} candidates", before, results.len());
                if results.is_empty() {
                    println!("⚠️  No words match. Use 'undo' or 'reset'.");
                } else if results.len() <= 10 {
                    let words: Vec<String> =
                        results.iter().map(|c| c.word.to_uppercase()).collect();
                    println!("Remaining words: {}", words.join(" "));
                }
            }
            "exclude" | "x" => match parts.get(1) {
                Some(letters) => self.board.exclude(letters),
                None => println!("Usage: exclude <letters>"),
            },
            "board" | "b" => self.print_board()?,
            "words" | "w" | "remaining" => {
                let limit = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(20);
                print_candidates(&self.candidates()?.1, limit);
            }
            "letters" | "l" => {
                let (_, results) = self.candidates()?;
                print_letters(&Distribution::aggregate(&results));
            }
            "top" | "t" | "suggest" => {
                let mut options = self.rank.options();
                if let Some(n) = parts.get(1).and_then(|s| s.parse().ok()) {
                    options.top_n = n;
                }
                let (_, results) = self.candidates()?;
                let distribution = self.solver.compute_distributions(&results);
                print_ranked(&rank_with_spinner(&self.solver, &results, &distribution, &options));
            }
            "fresh" | "f" => {
                let limit = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(20);
                let (c, results) = self.candidates()?;
                let distribution = self.solver.compute_distributions(&results);
                let words = self.solver.find_from_remaining_letters(
                    &c.used.to_string(),
                    &c.excluded,
                    &distribution,
                    Some(c.length),
                    self.rank.min_frequency,
                );
                print_fresh(&words, limit);
            }
            "dump" => {
                let Some(path) = parts.get(1) else {
                    println!("Usage: dump <file>");
                    return Ok(true);
                };
                let (_, results) = self.candidates()?;
                wordle_assist::save_results(path, &results)
                    .with_context(|| format!("writing {}", path))?;
                println!("Saved {} words to {}", results.len(), path);
            }
            "undo" | "u" => self.undo(),
            "reset" => {
                self.board.clear();
                println!("Board cleared.");
            }
            other => {
                println!("Unknown command: {}", other);
                println!("Type 'help' for available commands.");
            }
        }
        Ok(true)
    }

    fn undo(&mut self) {
        if self.board.pop_row().is_none() {
            println!("Nothing to undo.");
        }
    }
}

fn run_interactive(solver: WordleSolver, length: usize, rank: RankArgs) -> Result<()> {
    for line in BANNER_TEXT.lines().take(5) {
        println!("{}", line);
    }
    println!("{} words loaded. Type 'help' for commands.", solver.corpus().len());
    println!();

    let mut session = Session {
        solver,
        board: Board::new(length),
        rank,
    };
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        match session.handle(&parts) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("Error: {:#}", e),
        }
    }
    println!("Goodbye!");
    Ok(())
}

fn run_filter(
    solver: &WordleSolver,
    length: usize,
    pattern: &str,
    exclude: &str,
    misplaced: &str,
    dump: Option<PathBuf>,
    rank: RankArgs,
) -> Result<()> {
    let pattern = if pattern.is_empty() {
        "_".repeat(length)
    } else {
        pattern.to_string()
    };
    let results = solver.filter_words(Some(length), &pattern, exclude, misplaced);

    if let Some(path) = dump {
        wordle_assist::save_results(&path, &results)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("saved {} words to {}", results.len(), path.display());
    }

    print_candidates(&results, 20);
    println!();

    let distribution = solver.compute_distributions(&results);
    print_letters(&distribution);
    println!();

    print_ranked(&rank_with_spinner(solver, &results, &distribution, &rank.options()));
    println!();

    let mut used: String = pattern.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    used.extend(wordle_assist::parse_misplaced(misplaced).keys());
    let fresh = solver.find_from_remaining_letters(
        &used,
        exclude,
        &distribution,
        Some(length),
        rank.min_frequency,
    );
    print_fresh(&fresh, 20);
    Ok(())
}

fn run_solve(solver: &WordleSolver, target: &str, max_turns: usize, rank: RankArgs) -> Result<()> {
    if !target.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!("target must be letters only: {}", target);
    }
    println!("Solving for: {}", target.to_uppercase());
    println!();

    let guesses = solver.solve_for_target(target, &rank.options(), max_turns);
    for (i, (guess, pattern)) in guesses.iter().enumerate() {
        println!(
            "Guess {}: {} → {}",
            i + 1,
            guess.to_uppercase(),
            pattern.to_emoji_string()
        );
    }

    println!();
    match guesses.last() {
        Some((_, pattern)) if pattern.is_win() => println!("✓ Solved in {} guesses!", guesses.len()),
        _ => println!("✗ Failed to solve within {} guesses.", max_turns),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(Command::Feedback { guess, answer }) = &cli.command {
        if guess.len() != answer.len() {
            bail!("guess and answer must have the same length");
        }
        let pattern = FeedbackPattern::calculate(guess, answer);
        println!("{}  {}", pattern, pattern.to_emoji_string());
        return Ok(());
    }

    let solver = WordleSolver::open(&cli.corpus)
        .with_context(|| format!("loading corpus {}", cli.corpus.display()))?;
    info!("{} words in corpus", solver.corpus().len());

    match cli.command {
        Some(Command::Filter {
            length,
            pattern,
            exclude,
            misplaced,
            dump,
            rank,
        }) => run_filter(&solver, length, &pattern, &exclude, &misplaced, dump, rank),
        Some(Command::Solve {
            target,
            max_turns,
            rank,
        }) => run_solve(&solver, &target, max_turns, rank),
        Some(Command::Interactive { length, rank }) => run_interactive(solver, length, rank),
        Some(Command::Feedback { .. }) => Ok(()),
        None => run_interactive(solver, 5, RankArgs::default()),
    }
}
