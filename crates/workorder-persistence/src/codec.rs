//! CSV encoding of a work order document.
//!
//! The file is denormalized: every data row repeats the work order number
//! and project name ahead of the seven room columns. Only the first data row
//! is consulted for those two values on load.

use std::io;
use workorder_core::{Clock, WorkOrderError, WorkOrderResult};
use workorder_domain::{Document, RoomRecord, RoomRow};

pub const CSV_HEADER: [&str; 9] = [
    "Work Order #",
    "Project Name",
    "Room Name",
    "Room Type",
    "Door Style",
    "Nests",
    "Labels",
    "Door Count",
    "Completion Time",
];

/// Serializes the document as header + one row per room.
pub fn encode(document: &Document) -> WorkOrderResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(write_error)?;
    for room in document.rooms() {
        let row = room.to_row();
        let record = [document.work_order.as_str(), document.project_name.as_str()]
            .into_iter()
            .chain(row.iter().map(String::as_str));
        writer.write_record(record).map_err(write_error)?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Parses a complete document.
///
/// Requires a header and at least one data row; every data row must carry
/// all nine columns. Columns past the ninth are ignored.
pub fn decode(bytes: &[u8], clock: &dyn Clock) -> WorkOrderResult<Document> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| WorkOrderError::Format(format!("Invalid CSV: {}", e)))?;

    let (header, data_rows) = match records.split_first() {
        Some((header, rows)) if !rows.is_empty() => (header, rows),
        _ => {
            return Err(WorkOrderError::Format(
                "Invalid CSV format: expected a header row and at least one room".to_string(),
            ))
        }
    };

    if !header.iter().eq(CSV_HEADER.iter().copied()) {
        tracing::warn!("Unexpected CSV header: {:?}", header);
    }

    let mut document = Document::default();
    for (offset, record) in data_rows.iter().enumerate() {
        if record.len() < CSV_HEADER.len() {
            let line = record
                .position()
                .map(|pos| pos.line())
                .unwrap_or(offset as u64 + 2);
            return Err(WorkOrderError::Format(format!(
                "Row on line {} has {} columns, expected {}",
                line,
                record.len(),
                CSV_HEADER.len()
            )));
        }

        if offset == 0 {
            document.work_order = record[0].to_string();
            document.project_name = record[1].to_string();
        }

        let row: RoomRow = std::array::from_fn(|i| record[i + 2].to_string());
        document.push_room(RoomRecord::from_row(row, clock));
    }

    tracing::debug!(
        "Decoded work order {:?} with {} rooms",
        document.work_order,
        document.room_count()
    );
    Ok(document)
}

fn write_error(e: csv::Error) -> WorkOrderError {
    WorkOrderError::Io(io::Error::other(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use workorder_core::FixedClock;
    use workorder_domain::CompletionFlag;

    fn clock() -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(2025, 1, 6)
                .unwrap()
                .and_hms_opt(7, 45, 30)
                .unwrap(),
        )
    }

    const HEADER_LINE: &str = "Work Order #,Project Name,Room Name,Room Type,Door Style,Nests,Labels,Door Count,Completion Time";

    #[test]
    fn test_encode_kitchen_remodel() {
        let mut doc = Document::new("WO-100", "Kitchen Remodel");
        let mut pantry = RoomRecord::new("Pantry", "Base", "Shaker", "4");
        pantry.set_flag(CompletionFlag::Nests, true, &clock());
        pantry.set_flag(CompletionFlag::Labels, true, &clock());
        doc.push_room(pantry);

        let text = String::from_utf8(encode(&doc).unwrap()).unwrap();
        assert_eq!(
            text,
            format!(
                "{}\r\nWO-100,Kitchen Remodel,Pantry,Base,Shaker,Yes,Yes,4,2025-01-06 07:45:30\r\n",
                HEADER_LINE
            )
        );
    }

    #[test]
    fn test_encode_empty_document_is_header_only() {
        let doc = Document::new("WO-1", "Empty");
        let text = String::from_utf8(encode(&doc).unwrap()).unwrap();
        assert_eq!(text, format!("{}\r\n", HEADER_LINE));
    }

    #[test]
    fn test_encode_quotes_embedded_commas() {
        let mut doc = Document::new("WO-2", "Smith, John");
        doc.push_room(RoomRecord::new("Bath \"main\"", "Vanity", "Flat\npanel", "2"));

        let bytes = encode(&doc).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("\"Smith, John\""));
        assert!(text.contains("\"Bath \"\"main\"\"\""));

        let decoded = decode(&bytes, &clock()).unwrap();
        assert_eq!(decoded, doc);
    }

    #[test]
    fn test_decode_header_only_is_format_error() {
        let err = decode(format!("{}\n", HEADER_LINE).as_bytes(), &clock()).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_decode_empty_input_is_format_error() {
        assert!(decode(b"", &clock()).unwrap_err().is_format());
    }

    #[test]
    fn test_decode_uses_first_row_for_header_fields() {
        let input = format!(
            "{}\n\
             WO-1,First Project,Kitchen,Base,Shaker,Yes,No,10,Not Completed\n\
             WO-2,Second Project,Pantry,Tall,Slab,No,No,2,Not Completed\n\
             WO-3,Third Project,Laundry,Upper,Shaker,Yes,Yes,6,2024-12-01 10:00:00\n",
            HEADER_LINE
        );

        let doc = decode(input.as_bytes(), &clock()).unwrap();
        assert_eq!(doc.work_order, "WO-1");
        assert_eq!(doc.project_name, "First Project");
        let names: Vec<_> = doc.rooms().iter().map(|r| r.room_name.as_str()).collect();
        assert_eq!(names, vec!["Kitchen", "Pantry", "Laundry"]);
        assert_eq!(
            doc.rooms()[2].completion_time(),
            Some("2024-12-01 10:00:00")
        );
    }

    #[test]
    fn test_decode_short_row_is_format_error() {
        let input = format!(
            "{}\nWO-1,P,Kitchen,Base,Shaker,Yes,No,10,Not Completed\nWO-1,P,Pantry\n",
            HEADER_LINE
        );
        let err = decode(input.as_bytes(), &clock()).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_decode_ignores_extra_columns() {
        let input = format!(
            "{}\nWO-1,P,Kitchen,Base,Shaker,No,No,10,Not Completed,extra,more\n",
            HEADER_LINE
        );
        let doc = decode(input.as_bytes(), &clock()).unwrap();
        assert_eq!(doc.room_count(), 1);
        assert_eq!(doc.rooms()[0].door_count, "10");
    }

    #[test]
    fn test_decode_accepts_unknown_header() {
        let input = "a,b,c,d,e,f,g,h,i\nWO-9,P,Den,Base,Slab,No,No,1,Not Completed\n";
        let doc = decode(input.as_bytes(), &clock()).unwrap();
        assert_eq!(doc.work_order, "WO-9");
    }

    #[test]
    fn test_decode_invalid_utf8_is_format_error() {
        let mut input = format!("{}\nWO-1,P,", HEADER_LINE).into_bytes();
        input.extend_from_slice(&[0xff, 0xfe]);
        input.extend_from_slice(b",Base,Shaker,No,No,1,Not Completed\n");
        assert!(decode(&input, &clock()).unwrap_err().is_format());
    }
}
