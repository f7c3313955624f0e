use poset_types::printer::{BincodeSink, ReportPrinter};
use poset_types::search::{Config, Search};

use clap::Parser;

/// Exhaustively generate poset types up to a fixed vertex bound.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of vertices of the generated diaries
    #[arg(long, default_value_t = 3)]
    max_leafs: usize,
    /// Print the search state at every node
    #[arg(long)]
    debug: bool,
    /// Recheck the incremental relation bookkeeping at every node
    #[arg(long)]
    check: bool,
    /// Stream bincode records instead of the text report
    #[arg(long)]
    bincode: bool,
}

fn main() {
  let args = Args::parse();
  let config = Config::new(args.max_leafs, args.debug, args.check);
  let stdout = std::io::stdout();
  let count = if args.bincode {
    let mut sink = BincodeSink::new(stdout.lock());
    Search::new(config, &mut sink).run();
    sink.count()
  } else {
    let mut printer = ReportPrinter::new(stdout.lock());
    Search::new(config, &mut printer).run();
    printer.count()
  };
  eprintln!("{} diaries", count);
}
