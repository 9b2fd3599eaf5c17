use printpdf::{BuiltinFont, Mm, PdfDocument};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};

use crate::error::{Error, Result};
use crate::models::agency::Agency;
use crate::models::candidate::Candidate;
use crate::models::employer::Employer;

const LETTERHEAD: &str = "Recruitment Agency Management Portal";

const PDF_PAGE_WIDTH_MM: f32 = 210.0;
const PDF_PAGE_HEIGHT_MM: f32 = 297.0;
const PDF_LINES_PER_PAGE: usize = 42;

/// One cell of a generated sheet. Status cells get the colored treatment.
enum CellValue {
    Text(String),
    Number(f64),
    Status(String),
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn status_display(status: &str) -> String {
    match status {
        "pending" => "Pending".to_string(),
        "approved" => "Approved".to_string(),
        "rejected" => "Rejected".to_string(),
        other => other.to_string(),
    }
}

fn fmt_date(date: Option<chrono::DateTime<chrono::Utc>>) -> String {
    date.map(|d| d.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn joined_documents(paths: &[&Option<String>], to_url: &dyn Fn(&str) -> String) -> String {
    let urls: Vec<String> = paths
        .iter()
        .filter_map(|p| p.as_deref())
        .map(to_url)
        .collect();
    if urls.is_empty() {
        "-".to_string()
    } else {
        urls.join("\n")
    }
}

pub struct ExportService;

impl ExportService {
    /// Styled workbook shared by the three record types: title banner,
    /// export-timestamp subtitle, colored status cells, summary row, frozen
    /// header and autofilter.
    fn build_workbook(
        sheet_name: &str,
        report_title: &str,
        columns: &[(&str, f64)],
        rows: &[Vec<CellValue>],
    ) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name)?;

        let primary_color = Color::RGB(0x1E293B);
        let header_bg = Color::RGB(0x0F172A);
        let header_text = Color::White;
        let alt_row_1 = Color::RGB(0xF8FAFC);
        let alt_row_2 = Color::White;
        let border_color = Color::RGB(0xE2E8F0);

        let status_pending = Color::RGB(0xF59E0B);
        let status_approved = Color::RGB(0x10B981);
        let status_rejected = Color::RGB(0xEF4444);

        for (i, (_, width)) in columns.iter().enumerate() {
            worksheet.set_column_width(i as u16, *width)?;
        }

        let title_format = Format::new()
            .set_font_size(16)
            .set_bold()
            .set_font_color(header_text)
            .set_background_color(primary_color)
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);

        worksheet.set_row_height(0, 40)?;
        worksheet.merge_range(0, 0, 0, (columns.len() - 1) as u16, report_title, &title_format)?;

        let subtitle_format = Format::new()
            .set_font_size(10)
            .set_italic()
            .set_font_color(Color::RGB(0x94A3B8))
            .set_background_color(primary_color)
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);

        worksheet.set_row_height(1, 22)?;
        let now = chrono::Utc::now().format("%d.%m.%Y %H:%M UTC").to_string();
        let subtitle_text = format!("Exported: {}  |  Records: {}", now, rows.len());
        worksheet.merge_range(
            1,
            0,
            1,
            (columns.len() - 1) as u16,
            &subtitle_text,
            &subtitle_format,
        )?;

        let header_format = Format::new()
            .set_bold()
            .set_font_size(10)
            .set_font_color(header_text)
            .set_background_color(header_bg)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);

        let header_row = 2;
        worksheet.set_row_height(header_row, 30)?;
        for (i, (name, _)) in columns.iter().enumerate() {
            worksheet.write_string_with_format(header_row, i as u16, *name, &header_format)?;
        }

        let mut pending_count = 0usize;
        let mut approved_count = 0usize;
        let mut rejected_count = 0usize;

        let data_start_row = 3;
        for (idx, row_cells) in rows.iter().enumerate() {
            let row = data_start_row + idx as u32;
            let bg = if idx % 2 == 0 { alt_row_1 } else { alt_row_2 };

            let base_fmt = Format::new()
                .set_font_size(10)
                .set_background_color(bg)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap()
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);
            let center_fmt = base_fmt.clone().set_align(FormatAlign::Center);

            worksheet.set_row_height(row, 22)?;

            for (col, cell) in row_cells.iter().enumerate() {
                let col = col as u16;
                match cell {
                    CellValue::Text(text) => {
                        worksheet.write_string_with_format(row, col, text, &base_fmt)?;
                    }
                    CellValue::Number(value) => {
                        worksheet.write_number_with_format(row, col, *value, &center_fmt)?;
                    }
                    CellValue::Status(status) => {
                        let color = match status.as_str() {
                            "pending" => {
                                pending_count += 1;
                                status_pending
                            }
                            "approved" => {
                                approved_count += 1;
                                status_approved
                            }
                            "rejected" => {
                                rejected_count += 1;
                                status_rejected
                            }
                            _ => Color::RGB(0x64748B),
                        };
                        let status_fmt = Format::new()
                            .set_font_size(10)
                            .set_bold()
                            .set_font_color(Color::White)
                            .set_background_color(color)
                            .set_align(FormatAlign::Center)
                            .set_align(FormatAlign::VerticalCenter)
                            .set_border(FormatBorder::Thin)
                            .set_border_color(border_color);
                        worksheet.write_string_with_format(
                            row,
                            col,
                            &status_display(status),
                            &status_fmt,
                        )?;
                    }
                }
            }
        }

        let total_row = data_start_row + rows.len() as u32 + 1;
        let summary_fmt = Format::new()
            .set_bold()
            .set_font_size(10)
            .set_font_color(primary_color)
            .set_background_color(Color::RGB(0xE0E7FF))
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);

        worksheet.set_row_height(total_row, 26)?;
        worksheet.merge_range(
            total_row,
            0,
            total_row,
            1,
            &format!("Total: {} records", rows.len()),
            &summary_fmt,
        )?;
        let status_summary = format!(
            "Pending: {} | Approved: {} | Rejected: {}",
            pending_count, approved_count, rejected_count
        );
        worksheet.merge_range(total_row, 2, total_row, 5, &status_summary, &summary_fmt)?;
        for col in 6..columns.len() as u16 {
            worksheet.write_string_with_format(total_row, col, "", &summary_fmt)?;
        }

        worksheet.set_freeze_panes(3, 0)?;
        if !rows.is_empty() {
            worksheet.autofilter(
                2,
                0,
                data_start_row + rows.len() as u32 - 1,
                (columns.len() - 1) as u16,
            )?;
        }

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }

    pub fn candidates_workbook(
        candidates: &[Candidate],
        to_url: &dyn Fn(&str) -> String,
    ) -> Result<Vec<u8>> {
        let columns = [
            ("#", 8.0),
            ("Full Name", 28.0),
            ("Email", 28.0),
            ("Phone", 18.0),
            ("Date of Birth", 14.0),
            ("Passport No.", 16.0),
            ("Preferred Job", 20.0),
            ("Country", 14.0),
            ("City", 14.0),
            ("Experience (yrs)", 14.0),
            ("Skills", 32.0),
            ("Status", 14.0),
            ("Documents", 50.0),
            ("Registered", 18.0),
        ];

        let rows: Vec<Vec<CellValue>> = candidates
            .iter()
            .enumerate()
            .map(|(idx, c)| {
                let mut skills = Vec::new();
                if c.skill_housekeeping {
                    skills.push("housekeeping");
                }
                if c.skill_childcare {
                    skills.push("childcare");
                }
                if c.skill_elderly_care {
                    skills.push("elderly care");
                }
                if c.skill_cooking {
                    skills.push("cooking");
                }
                if c.skill_driving {
                    skills.push("driving");
                }
                let skills = if skills.is_empty() {
                    "-".to_string()
                } else {
                    skills.join(", ")
                };

                vec![
                    CellValue::Number((idx + 1) as f64),
                    CellValue::Text(c.full_name()),
                    CellValue::Text(c.email.clone()),
                    CellValue::Text(c.phone.clone()),
                    CellValue::Text(c.date_of_birth.format("%d.%m.%Y").to_string()),
                    CellValue::Text(c.passport_number.clone()),
                    CellValue::Text(c.preferred_job.clone()),
                    CellValue::Text(c.preferred_country.clone().unwrap_or_else(|| "-".into())),
                    CellValue::Text(c.city.clone()),
                    c.experience_years
                        .map(|y| CellValue::Number(y as f64))
                        .unwrap_or_else(|| CellValue::Text("-".into())),
                    CellValue::Text(skills),
                    CellValue::Status(c.status.clone()),
                    CellValue::Text(joined_documents(
                        &[
                            &c.passport_scan_path,
                            &c.photo_path,
                            &c.medical_clearance_path,
                            &c.police_clearance_path,
                        ],
                        to_url,
                    )),
                    CellValue::Text(fmt_date(c.created_at)),
                ]
            })
            .collect();

        Self::build_workbook("Candidates", "Candidate Registrations", &columns, &rows)
    }

    pub fn employers_workbook(
        employers: &[Employer],
        to_url: &dyn Fn(&str) -> String,
    ) -> Result<Vec<u8>> {
        let columns = [
            ("#", 8.0),
            ("Company", 30.0),
            ("Sector", 18.0),
            ("Employees", 12.0),
            ("Contact Person", 24.0),
            ("Phone", 18.0),
            ("Email", 28.0),
            ("City", 14.0),
            ("Hired Before", 12.0),
            ("Verified", 10.0),
            ("Status", 14.0),
            ("Documents", 50.0),
            ("Registered", 18.0),
        ];

        let rows: Vec<Vec<CellValue>> = employers
            .iter()
            .enumerate()
            .map(|(idx, e)| {
                vec![
                    CellValue::Number((idx + 1) as f64),
                    CellValue::Text(e.company_name.clone()),
                    CellValue::Text(e.business_sector.clone()),
                    e.employee_count
                        .map(|n| CellValue::Number(n as f64))
                        .unwrap_or_else(|| CellValue::Text("-".into())),
                    CellValue::Text(e.contact_person_name.clone()),
                    CellValue::Text(e.phone.clone()),
                    CellValue::Text(e.email.clone()),
                    CellValue::Text(e.city.clone()),
                    CellValue::Text(yes_no(e.has_hired_before).to_string()),
                    CellValue::Text(yes_no(e.verified).to_string()),
                    CellValue::Status(e.status.clone()),
                    CellValue::Text(joined_documents(
                        &[
                            &e.license_path,
                            &e.registration_certificate_path,
                            &e.contact_photo_path,
                        ],
                        to_url,
                    )),
                    CellValue::Text(fmt_date(e.created_at)),
                ]
            })
            .collect();

        Self::build_workbook("Employers", "Employer Registrations", &columns, &rows)
    }

    pub fn agencies_workbook(
        agencies: &[Agency],
        to_url: &dyn Fn(&str) -> String,
    ) -> Result<Vec<u8>> {
        let columns = [
            ("#", 8.0),
            ("Agency", 30.0),
            ("License No.", 16.0),
            ("Director", 24.0),
            ("Phone", 18.0),
            ("Email", 28.0),
            ("City", 14.0),
            ("Recruiters", 12.0),
            ("Services", 32.0),
            ("Verified", 10.0),
            ("Status", 14.0),
            ("Documents", 50.0),
            ("Registered", 18.0),
        ];

        let rows: Vec<Vec<CellValue>> = agencies
            .iter()
            .enumerate()
            .map(|(idx, a)| {
                vec![
                    CellValue::Number((idx + 1) as f64),
                    CellValue::Text(a.agency_name.clone()),
                    CellValue::Text(a.license_number.clone()),
                    CellValue::Text(a.director_name.clone()),
                    CellValue::Text(a.phone.clone()),
                    CellValue::Text(a.email.clone()),
                    CellValue::Text(a.city.clone()),
                    a.recruiter_count
                        .map(|n| CellValue::Number(n as f64))
                        .unwrap_or_else(|| CellValue::Text("-".into())),
                    CellValue::Text(a.services_offered.clone().unwrap_or_else(|| "-".into())),
                    CellValue::Text(yes_no(a.verified).to_string()),
                    CellValue::Status(a.status.clone()),
                    CellValue::Text(joined_documents(
                        &[
                            &a.license_path,
                            &a.registration_certificate_path,
                            &a.director_photo_path,
                        ],
                        to_url,
                    )),
                    CellValue::Text(fmt_date(a.created_at)),
                ]
            })
            .collect();

        Self::build_workbook("Agencies", "Agency Registrations", &columns, &rows)
    }

    /// Paginated letterhead document: banner, generation date, one line per
    /// record, page numbers in the footer.
    fn build_pdf(report_title: &str, lines: &[String]) -> Result<Vec<u8>> {
        let (doc, first_page, first_layer) = PdfDocument::new(
            report_title,
            Mm(PDF_PAGE_WIDTH_MM),
            Mm(PDF_PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| Error::Pdf(e.to_string()))?;

        let page_count = lines.len().div_ceil(PDF_LINES_PER_PAGE).max(1);
        let generated = chrono::Utc::now().format("%d.%m.%Y %H:%M UTC").to_string();

        let mut pages = vec![(first_page, first_layer)];
        for _ in 1..page_count {
            pages.push(doc.add_page(Mm(PDF_PAGE_WIDTH_MM), Mm(PDF_PAGE_HEIGHT_MM), "Layer 1"));
        }

        for (page_idx, (page, layer)) in pages.iter().enumerate() {
            let layer = doc.get_page(*page).get_layer(*layer);

            // Letterhead
            layer.use_text(LETTERHEAD, 16.0, Mm(20.0), Mm(280.0), &bold);
            layer.use_text(report_title, 12.0, Mm(20.0), Mm(272.0), &font);
            layer.use_text(
                format!("Generated: {}  |  Records: {}", generated, lines.len()),
                9.0,
                Mm(20.0),
                Mm(265.0),
                &font,
            );

            let start = page_idx * PDF_LINES_PER_PAGE;
            let end = (start + PDF_LINES_PER_PAGE).min(lines.len());
            let mut y = 255.0;
            for line in &lines[start..end] {
                layer.use_text(line.as_str(), 9.0, Mm(20.0), Mm(y), &font);
                y -= 5.5;
            }

            layer.use_text(
                format!("Page {} of {}", page_idx + 1, page_count),
                8.0,
                Mm(95.0),
                Mm(10.0),
                &font,
            );
        }

        doc.save_to_bytes().map_err(|e| Error::Pdf(e.to_string()))
    }

    pub fn candidates_pdf(candidates: &[Candidate]) -> Result<Vec<u8>> {
        let lines: Vec<String> = candidates
            .iter()
            .enumerate()
            .map(|(idx, c)| {
                format!(
                    "{:>3}. {} | {} | {} | {} | {}",
                    idx + 1,
                    c.full_name(),
                    c.passport_number,
                    c.preferred_job,
                    c.city,
                    status_display(&c.status),
                )
            })
            .collect();
        Self::build_pdf("Candidate Registrations", &lines)
    }

    pub fn employers_pdf(employers: &[Employer]) -> Result<Vec<u8>> {
        let lines: Vec<String> = employers
            .iter()
            .enumerate()
            .map(|(idx, e)| {
                format!(
                    "{:>3}. {} | {} | {} | {} | {}",
                    idx + 1,
                    e.company_name,
                    e.business_sector,
                    e.contact_person_name,
                    e.city,
                    status_display(&e.status),
                )
            })
            .collect();
        Self::build_pdf("Employer Registrations", &lines)
    }

    pub fn agencies_pdf(agencies: &[Agency]) -> Result<Vec<u8>> {
        let lines: Vec<String> = agencies
            .iter()
            .enumerate()
            .map(|(idx, a)| {
                format!(
                    "{:>3}. {} | {} | {} | {} | {}",
                    idx + 1,
                    a.agency_name,
                    a.license_number,
                    a.director_name,
                    a.city,
                    status_display(&a.status),
                )
            })
            .collect();
        Self::build_pdf("Agency Registrations", &lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn sample_candidate(status: &str) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            first_name: "Abel".into(),
            last_name: "Tesfaye".into(),
            gender: "male".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 4, 2).unwrap(),
            phone: "+251911000000".into(),
            email: "abel@example.com".into(),
            city: "Addis Ababa".into(),
            region: None,
            passport_number: "EP1234567".into(),
            passport_issue_date: None,
            passport_expiry_date: None,
            preferred_job: "Driver".into(),
            preferred_country: Some("UAE".into()),
            experience_years: Some(3),
            skill_housekeeping: false,
            skill_childcare: false,
            skill_elderly_care: false,
            skill_cooking: true,
            skill_driving: true,
            passport_scan_path: Some("uploads/candidates/a.pdf".into()),
            photo_path: Some("uploads/candidates/b.png".into()),
            medical_clearance_path: None,
            police_clearance_path: None,
            status: status.into(),
            created_at: Some(chrono::Utc::now()),
            updated_at: Some(chrono::Utc::now()),
        }
    }

    fn to_url(path: &str) -> String {
        format!("http://localhost:8080/{}", path)
    }

    #[test]
    fn candidates_workbook_is_a_nonempty_xlsx() {
        let records = vec![sample_candidate("pending"), sample_candidate("approved")];
        let buffer = ExportService::candidates_workbook(&records, &to_url).unwrap();
        // XLSX is a zip container
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn empty_collection_still_produces_a_workbook() {
        let buffer = ExportService::candidates_workbook(&[], &to_url).unwrap();
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn candidates_pdf_has_pdf_header() {
        let records = vec![sample_candidate("rejected")];
        let buffer = ExportService::candidates_pdf(&records).unwrap();
        assert!(buffer.starts_with(b"%PDF"));
    }

    #[test]
    fn pdf_paginates_long_collections() {
        let records: Vec<Candidate> =
            (0..PDF_LINES_PER_PAGE * 2 + 5).map(|_| sample_candidate("pending")).collect();
        let buffer = ExportService::candidates_pdf(&records).unwrap();
        assert!(buffer.starts_with(b"%PDF"));
        // Three content pages expected at 2 full pages + remainder
        let text = String::from_utf8_lossy(&buffer);
        assert!(text.contains("/Page"));
    }
}
