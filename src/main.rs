//! # zapstats CLI
//!
//! Command-line interface for the zapstats library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use zapstats::ZapstatsError;
use zapstats::cli::Args;
use zapstats::core::keywords::{Rake, rake_phrases};
use zapstats::core::output::write_reports;
use zapstats::core::processor::{AnalysisReport, prepare_table};
use zapstats::core::wordfreq::word_count_table;
use zapstats::ingest::read_chat_dir;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<(), ZapstatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let filter = args.filter_config()?;
    let analysis = args.analysis_config();
    let report_config = args.report_config();
    let stopwords = args.load_stopwords()?;

    // Print header
    println!("📦 zapstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input_dir.display());
    println!("💾 Output:  {}", args.output_dir.display());
    println!("📄 Format:  {}", args.format);
    match args.stopwords {
        Some(ref path) => println!("🚫 Stopwords: {} ({} words)", path.display(), stopwords.len()),
        None => println!("🚫 Stopwords: {} ({} words)", args.language, stopwords.len()),
    }
    if let Some(ref after) = args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {}", before);
    }
    if let Some(ref from) = args.from {
        println!("👤 From:    {}", from);
    }
    println!();

    // Step 1: Read the directory
    println!("⏳ Reading chat files...");
    let read_start = Instant::now();
    let corpus = read_chat_dir(&args.input_dir, &args.ingest_config())?;
    println!(
        "   Read {} files ({:.2}s)",
        corpus.files.len(),
        read_start.elapsed().as_secs_f64()
    );
    for skipped in &corpus.skipped {
        println!("⚠️  Skipped {}", skipped.path.display());
    }

    // Step 2: Extract messages and build the table
    println!("🧹 Building message table...");
    let table_start = Instant::now();
    let (table, stats) = prepare_table(&corpus, &filter, &analysis)?;
    println!(
        "   {} messages, {} kept ({:.2}s)",
        stats.extracted,
        stats.final_records,
        table_start.elapsed().as_secs_f64()
    );
    if !stats.dropped_senders.is_empty() {
        println!(
            "   Dropped {} senders with fewer than {} messages",
            stats.dropped_senders.len(),
            analysis.min_messages
        );
    }

    // Step 3: Word frequencies
    println!("🔤 Counting words...");
    let words_start = Instant::now();
    let word_counts = word_count_table(&table, analysis.word_limit, &stopwords);
    println!(
        "   {} rows for {} senders ({:.2}s)",
        word_counts.len(),
        table.senders().len(),
        words_start.elapsed().as_secs_f64()
    );

    // Step 4: Keyword phrases
    println!("🔑 Extracting keyword phrases...");
    let rake_start = Instant::now();
    let rake = Rake::new(stopwords, args.rake_config());
    let phrases = rake_phrases(table.messages(), analysis.phrase_limit, &rake);
    println!(
        "   {} phrases ({:.2}s)",
        phrases.len(),
        rake_start.elapsed().as_secs_f64()
    );

    // Step 5: Reports
    println!("💾 Writing reports...");
    let write_start = Instant::now();
    let report = AnalysisReport {
        table,
        word_counts,
        phrases,
        stats,
    };
    let written = write_reports(&report, &corpus, &report_config)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Reports saved to {}", report_config.output_dir.display());
    for path in &written {
        println!("   {}", path.display());
    }

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Files:     {}", corpus.files.len());
    println!("   Messages:  {}", report.stats.extracted);
    if report.stats.invalid > 0 {
        println!("   Invalid:   {}", report.stats.invalid);
    }
    if filter.is_active() {
        println!("   Filtered:  {}", report.stats.filtered_out);
    }
    println!(
        "   Analyzed:  {} ({:.1}%)",
        report.stats.final_records,
        report.stats.retention_ratio()
    );
    println!("   Senders:   {}", report.table.senders().len());

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = report.stats.extracted as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}
