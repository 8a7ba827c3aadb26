//! Example: Using zapstats as a library
//!
//! This example runs each stage of the pipeline on an in-memory chat.
//!
//! Run with: cargo run --example library_usage

use zapstats::format::to_format_string;
use zapstats::prelude::*;

const CHAT: &str = "\
3/14/21, 9:00 PM - Messages and calls are end-to-end encrypted.
3/14/21, 9:01 PM - Ana: Eu gosto de gatos.
3/14/21, 9:02 PM - Bruno: Vou levar a pizza
3/14/21, 9:03 PM - Ana: Gatos são legais
3/14/21, 9:04 PM - Bruno: Pizza de calabresa
com borda recheada
3/14/21, 9:05 PM - Ana: <Media omitted>
3/14/21, 9:06 PM - Carla: Oi gente
3/14/21, 9:07 PM - Bruno: Pizza chegou!";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== zapstats Library Usage Examples ===\n");

    // Example 1: Extract raw messages
    println!("1. Extracting messages:");
    let raws = WhatsAppParser::new().parse_str(CHAT);
    for msg in &raws {
        println!("   {}: {}", msg.sender, msg.body.replace('\n', " | "));
    }

    // Example 2: Typed table
    println!("\n2. Message table:");
    let mut table = build_table(&raws, true)?;
    for record in table.iter() {
        println!(
            "   {}/{}/{} {} {}",
            record.month,
            record.day,
            record.year,
            record.time_string(),
            record.sender
        );
    }

    // Example 3: Filters and the noise threshold
    println!("\n3. Filtering:");
    let removed = apply_filters(&mut table, &FilterConfig::new().with_date_from("2021-03-14")?);
    println!("   Date filter removed {} messages", removed);
    let dropped = table.drop_sparse_senders(2);
    println!("   Senders below 2 messages: {:?}", dropped);

    // Example 4: Word frequencies
    println!("\n4. Most common words per sender:");
    let stopwords = Stopwords::for_language(Language::Portuguese);
    let counts = word_count_table(&table, Some(3), &stopwords);
    for row in &counts {
        println!("   {:<6} {:<10} {}", row.sender, row.word, row.count);
    }

    // Example 5: Keyword phrases
    println!("\n5. Keyword phrases:");
    let rake = Rake::new(stopwords.clone(), RakeConfig::new());
    for phrase in rake_phrases(table.messages(), Some(5), &rake) {
        println!("   {}", phrase);
    }

    // Example 6: Scores behind the ranking
    println!("\n6. Phrase scores:");
    for ranked in rake.extract("Pizza de calabresa com borda recheada. Pizza chegou!") {
        println!("   {:>5.2}  {}", ranked.score, ranked.phrase);
    }

    // Example 7: Whole pipeline in one call
    println!("\n7. analyze():");
    let corpus = ChatCorpus::from_text(CHAT);
    let report = analyze(
        &corpus,
        &stopwords,
        &FilterConfig::new(),
        &AnalysisConfig::new().with_min_messages(2),
        &RakeConfig::new().with_max_length(3),
    )?;
    println!("   Extracted: {}", report.stats.extracted);
    println!("   Kept:      {}", report.stats.final_records);
    println!("   Dropped:   {:?}", report.stats.dropped_senders);

    // Example 8: Rendering tables
    println!("\n8. Rendering word counts:");
    print!("{}", to_format_string(&report.word_counts, OutputFormat::Csv, b';')?);
    println!("{}", to_format_string(&report.word_counts, OutputFormat::Jsonl, b';')?);

    println!("=== Examples complete! ===");
    Ok(())
}
