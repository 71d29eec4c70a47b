// Passport field extraction from noisy OCR text
// Reads an OCR text dump (or a passport image with the `ocr` feature)
// and prints the structured record.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use passfield::models::{record::FIELD_NAMES, PassportRecord};
use passfield::utils::ExtractionError;
use passfield::PassportExtractor;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "tif", "tiff", "bmp"];

#[derive(Parser)]
#[command(name = "passfield", about = "Extract structured passport fields from OCR text")]
struct Args {
    /// OCR text dump, or a passport image when built with the `ocr` feature
    input: PathBuf,

    /// Print the record as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Treat the input as raw OCR text regardless of its extension
    #[arg(long)]
    text: bool,
}

fn field_label(field: &str) -> String {
    field
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// Print a detailed extraction report
fn print_detailed_report(record: &PassportRecord) {
    println!("\n===============================================");
    println!("      PASSPORT EXTRACTION DETAILED REPORT");
    println!("===============================================\n");

    println!("EXTRACTED FIELDS:");
    for field in FIELD_NAMES {
        println!(
            "  {}: {}",
            field_label(field),
            record.get(field).unwrap_or("-")
        );
    }

    println!(
        "\nFields extracted: {} of {}",
        record.present_count(),
        FIELD_NAMES.len()
    );
}

fn looks_like_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn extract_record(args: &Args) -> Result<PassportRecord, ExtractionError> {
    let extractor = PassportExtractor::new();

    if !args.text && looks_like_image(&args.input) {
        #[cfg(feature = "ocr")]
        return extractor.parse_image(&args.input);
        #[cfg(not(feature = "ocr"))]
        return Err(ExtractionError::ImageProcessingError(
            "image input requires the `ocr` feature; pass --text to read the file as OCR text"
                .to_string(),
        ));
    }

    let raw_text = fs::read_to_string(&args.input)
        .map_err(|e| ExtractionError::IoError(format!("{}: {}", args.input.display(), e)))?;
    Ok(extractor.parse_text(&raw_text))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let record = match extract_record(&args) {
        Ok(record) => record,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing record: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_detailed_report(&record);
    }

    ExitCode::SUCCESS
}
