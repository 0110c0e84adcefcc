use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Ensure all fixture files exist, generating them if necessary
pub fn ensure_fixtures() {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");

    fs::create_dir_all(&fixtures_dir).expect("Failed to create fixtures directory");

    let csv_path = fixtures_dir.join("quotes.csv");
    if !csv_path.exists() {
        generate_csv_fixture(&csv_path);
    }

    let txt_path = fixtures_dir.join("quotes.txt");
    if !txt_path.exists() {
        generate_txt_fixture(&txt_path);
    }

    let docx_path = fixtures_dir.join("quotes.docx");
    if !docx_path.exists() {
        generate_docx_fixture(&docx_path);
    }

    let pdf_path = fixtures_dir.join("quotes.pdf");
    if !pdf_path.exists() {
        generate_pdf_fixture(&pdf_path);
    }

    let png_path = fixtures_dir.join("base.png");
    if !png_path.exists() {
        generate_png_fixture(&png_path);
    }
}

/// True when the external `pdftotext` tool is reachable on PATH.
pub fn pdftotext_available() -> bool {
    Command::new("pdftotext").arg("-v").output().is_ok()
}

/// Locate an installed TTF for engine tests; callers skip when none exists.
pub fn find_system_font() -> Option<PathBuf> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
    ];
    CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

fn generate_csv_fixture(path: &Path) {
    let csv_content = "body,author\nStay hungry,Steve Jobs\nBe water my friend,Bruce Lee\nSimplicity is the ultimate sophistication,Leonardo da Vinci\n";
    fs::write(path, csv_content).expect("Failed to write CSV fixture");
}

fn generate_txt_fixture(path: &Path) {
    let txt_content =
        "Bark like no one is listening - Rex\n\nWhatever happens happens - Spike\nNapping is self care - Fluffy\n";
    fs::write(path, txt_content).expect("Failed to write TXT fixture");
}

fn generate_docx_fixture(path: &Path) {
    use docx_rs::*;

    let docx = Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Bark less - Wag more")))
        .add_paragraph(Paragraph::new())
        .add_paragraph(
            Paragraph::new().add_run(Run::new().add_text("Every day is a treat day - Buddy")),
        );

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).expect("Failed to pack DOCX");
    fs::write(path, buffer.into_inner()).expect("Failed to write DOCX fixture");
}

/// Hand-built single-page PDF whose text stream holds two quote tokens in
/// the ` "` delimited layout the PDF ingestor expects.
fn generate_pdf_fixture(path: &Path) {
    let text = r#""A rose - Anonymous" "Carpe diem - Horace""#;
    write_pdf(path, &format!("BT /F1 12 Tf 72 712 Td ({text}) Tj ET"));
}

/// Single-page PDF with no text at all; `pdftotext` extracts nothing from it.
pub fn write_blank_pdf(path: &Path) {
    write_pdf(path, "BT ET");
}

fn write_pdf(path: &Path, stream: &str) {
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            stream.len(),
            stream
        ),
    ];

    let mut buf: Vec<u8> = Vec::new();
    buf.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets = Vec::new();
    for (i, obj) in objects.iter().enumerate() {
        offsets.push(buf.len());
        buf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, obj).as_bytes());
    }

    let xref_offset = buf.len();
    buf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    buf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    buf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    fs::write(path, buf).expect("Failed to write PDF fixture");
}

fn generate_png_fixture(path: &Path) {
    let img = image::RgbImage::from_pixel(400, 300, image::Rgb([30, 60, 120]));
    img.save(path).expect("Failed to write PNG fixture");
}
