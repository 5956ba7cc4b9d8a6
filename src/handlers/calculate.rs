use axum::{
    extract::{Form, FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Json,
};

use crate::{
    error::AppError,
    models::calculation::{CalculationForm, CalculationResult},
    services::deal_calculator,
};

/// Handler for POST /calculate
/// Parses the calculator form and returns the derived deal metrics
pub async fn calculate(request: Request) -> Result<Json<CalculationResult>, AppError> {
    let form = read_calculation_form(request).await?;
    let input = form.parse()?;

    let result = deal_calculator::compute(input);

    tracing::info!(
        "Calculated MAO {:.2} for '{}' (ARV {:.2})",
        result.mao,
        result.address,
        result.arv
    );

    Ok(Json(result))
}

/// Collect form fields from an urlencoded or multipart body.
///
/// Any other body carries no form fields, so every field is treated as absent.
async fn read_calculation_form(request: Request) -> Result<CalculationForm, AppError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &())
            .await
            .map_err(|rejection| AppError::MalformedForm(rejection.body_text()))?;
        Ok(CalculationForm::from_pairs(pairs))
    } else if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|rejection| AppError::MalformedForm(rejection.body_text()))?;

        let mut pairs = Vec::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::MalformedForm(e.body_text()))?
        {
            // Uploaded files are not form values
            if field.file_name().is_some() {
                continue;
            }
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let value = field
                .text()
                .await
                .map_err(|e| AppError::MalformedForm(e.body_text()))?;
            pairs.push((name, value));
        }

        Ok(CalculationForm::from_pairs(pairs))
    } else {
        tracing::debug!("No form body on /calculate (content type '{}')", content_type);
        Ok(CalculationForm::default())
    }
}
