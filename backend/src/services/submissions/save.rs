use crate::error::SubmissionError;
use crate::export::file_name;
use crate::export::layout::build_csv;
use crate::storage::StorageSink;
use actix_web::{web, HttpResponse};
use chrono::{Datelike, Local, Utc};
use common::model::submission::Submission;
use common::requests::SubmissionPayload;
use common::responses::SubmitResponse;
use log::{error, info, warn};

pub async fn process(
    payload: web::Json<SubmissionPayload>,
    sink: web::Data<dyn StorageSink>,
) -> Result<HttpResponse, SubmissionError> {
    let payload = payload.into_inner();
    info!(
        "Received submission for order {:?} with status {}",
        payload.order_id, payload.status
    );

    let submission = Submission::try_from(payload).inspect_err(|e| warn!("Rejected submission: {e}"))?;

    // Weeks are paired with the year the file is written, not the year of the date picked.
    let csv = build_csv(&submission, Local::now().year())
        .inspect_err(|e| error!("Error creating CSV for order {}: {e}", submission.order_id))?;
    let file_name = file_name(&submission.order_id, Utc::now());

    let stored = sink.store(&file_name, csv).await.inspect_err(|e| {
        error!("Error storing {file_name} via {}: {e}", sink.name());
    })?;
    info!("Stored {file_name} via {} at {}", sink.name(), stored.location);

    Ok(HttpResponse::Ok().json(SubmitResponse::stored(
        sink.success_message(),
        file_name,
        stored.details,
    )))
}
