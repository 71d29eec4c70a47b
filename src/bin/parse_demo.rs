use passfield::models::record::FIELD_NAMES;
use passfield::PassportExtractor;

// OCR output from a scanned data page, labels and MRZ both present
const SAMPLE_OCR_TEXT: &str = "\
PASSPORT
Passport No: AB1234567
Surname: SMITH
Given Names: JOHN ROBERT
Nationality: USA
Date of Birth: 15/03/1985
Place of Birth: NEW YORK, USA
Sex: M
Date of Issue: 10/06/2019
Date of Expiry: 10/06/2029
Issuing Authority: DEPARTMENT OF STATE

P<USASMITH<<JOHN<ROBERT<<<<<<<<<<<<<<<<<<<<<
AB12345674USA850315M2906108<<<<<<<<<<<<<<02";

fn main() {
    println!("Passport Field Extraction Demo");
    println!("------------------------------");

    println!("\nInput OCR text:\n{}", SAMPLE_OCR_TEXT);

    println!("\nExtracting fields...");
    let record = PassportExtractor::new().parse_text(SAMPLE_OCR_TEXT);

    println!("\nEXTRACTED RECORD:");
    for field in FIELD_NAMES {
        println!("  {}: {}", field, record.get(field).unwrap_or("-"));
    }

    println!(
        "\n{} of {} fields extracted",
        record.present_count(),
        FIELD_NAMES.len()
    );
}
