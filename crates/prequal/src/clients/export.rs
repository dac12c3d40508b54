use super::domain::ClientRecord;
use crate::wizard::answers::Timeline;

/// CSV export failure.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv writer flush failed: {0}")]
    Flush(#[from] std::io::Error),
    #[error("csv output was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Render client records as a CSV document for download, one row per record.
pub fn clients_to_csv(records: &[ClientRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "client_id",
        "name",
        "phone",
        "email",
        "category",
        "overall_rating",
        "timeline",
        "created_at",
    ])?;

    for record in records {
        let overall = record.result.rating.overall.to_string();
        let created_at = record.created_at.to_rfc3339();
        writer.write_record([
            record.client_id.0.as_str(),
            record.display_name(),
            record.answers.phone.as_deref().unwrap_or(""),
            record.answers.email.as_deref().unwrap_or(""),
            record.result.category.label(),
            overall.as_str(),
            record
                .answers
                .timeline
                .map(Timeline::label)
                .unwrap_or("unanswered"),
            created_at.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
