use marathi_normalizer::text_processing::normalization::normalize;
use marathi_normalizer::text_processing::numbers::spell;

/// Sample sentences with a short label for each
const SAMPLES: &[(&str, &str)] = &[
    ("आज तापमान 25 अंश आहे.", "Basic compound number"),
    ("डॉ. पाटील यांनी 100 रुपये दिले", "Abbreviation + 100"),
    ("इ.स. 2024 मध्ये", "Year 2024"),
    ("म. राज्यात 50 लाख लोक", "Short abbreviation"),
    ("15/08/1947 चा दिवस आणि 5 वी संख्या", "Date + plain number"),
    ("सभा 10:30 ला सुरू होईल", "Time"),
    ("तिकीट ₹250.50 आहे", "Currency"),
    ("निकाल 95% लागला", "Percentage"),
    ("तो 1ला आला आणि ती 2री आली", "Ordinals"),
    ("π चे मूल्य 3.14 आहे", "Decimal"),
    ("999 लोक आले", "Hundreds"),
    ("150000 लोक", "1.5 lakh"),
    ("0 ते 100", "Zero to hundred"),
];

/// Numbers with their expected spelling
const CHECKS: &[(i64, &str)] = &[
    (21, "एकवीस"),
    (25, "पंचवीस"),
    (42, "बेचाळीस"),
    (99, "नव्व्याण्णव"),
    (100, "शंभर"),
    (1000, "एक हजार"),
    (2024, "दोन हजार चोवीस"),
    (100000, "एक लाख"),
    (-25, "उणे पंचवीस"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Marathi Text Normalizer Samples ===\n");

    for (text, label) in SAMPLES {
        println!("[{}]", label);
        println!("  IN:  {}", text);
        println!("  OUT: {}", normalize(text));
        println!();
    }

    println!("=== Number Verification ===\n");

    let mut failures = 0;
    for (number, expected) in CHECKS {
        let got = spell(*number)?;
        let status = if got == *expected { "✓" } else { "✗" };
        if got != *expected {
            failures += 1;
        }
        println!("  {} {:>8} -> {:<30} (expected: {})", status, number, got, expected);
    }

    println!("\nChecked: {}, failed: {}", CHECKS.len(), failures);

    Ok(())
}
