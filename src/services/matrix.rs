use chrono::{Datelike, Utc};

use crate::backend::MatrixReader;
use crate::domain::daygrid::days_in_month;
use crate::dto::matrix::{MatrixPageData, MatrixQuery, SelectedPart};
use crate::services::{ServiceResult, resolve_period};

/// Loads the matrix page: all parts for the period plus the expanded
/// selection.
///
/// Selection falls back to the first returned row whenever the requested
/// part is absent from the fresh result set. Read failures degrade to an
/// empty page; the error is only logged.
pub async fn load_matrix_page<B>(backend: &B, query: MatrixQuery) -> ServiceResult<MatrixPageData>
where
    B: MatrixReader + ?Sized,
{
    let period = resolve_period(query.month, query.year, query.version);
    let days = days_in_month(period.month, period.year)?;

    let parts = match backend.matrix_table(&period).await {
        Ok(parts) => parts,
        Err(err) => {
            log::error!("Failed to fetch matrix table: {err}");
            Vec::new()
        }
    };

    let selected = query
        .part
        .as_deref()
        .and_then(|number| parts.iter().find(|part| part.part_number == number))
        .or_else(|| parts.first())
        .map(|part| SelectedPart {
            part_number: part.part_number.clone(),
            part_desc: part.part_desc.clone(),
            cells: days.iter().map(|&day| part.qty_on(day)).collect(),
        });

    let current_year = Utc::now().year();
    let year_options = (current_year - 2..=current_year + 2).collect();

    Ok(MatrixPageData {
        month: period.month,
        year: period.year,
        version: period.version,
        days,
        parts,
        selected,
        year_options,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::backend::PeriodQuery;
    use crate::backend::errors::{BackendError, BackendResult};
    use crate::domain::matrix::PartMatrix;
    use crate::services::ServiceError;

    struct MockBackend {
        response: Mutex<Option<BackendResult<Vec<PartMatrix>>>>,
    }

    impl MockBackend {
        fn returning(response: BackendResult<Vec<PartMatrix>>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
            }
        }
    }

    #[async_trait]
    impl MatrixReader for MockBackend {
        async fn matrix_table(&self, _query: &PeriodQuery) -> BackendResult<Vec<PartMatrix>> {
            self.response
                .lock()
                .expect("mock poisoned")
                .take()
                .expect("unexpected second fetch")
        }
    }

    fn sample_parts() -> Vec<PartMatrix> {
        vec![
            PartMatrix {
                part_number: "P1".to_string(),
                part_desc: "Bracket".to_string(),
                days: HashMap::from([(5, 10), (12, 3)]),
            },
            PartMatrix {
                part_number: "P2".to_string(),
                part_desc: "Clip".to_string(),
                days: HashMap::new(),
            },
        ]
    }

    fn query(part: Option<&str>) -> MatrixQuery {
        MatrixQuery {
            month: Some(10),
            year: Some(2025),
            version: Some(1),
            part: part.map(str::to_string),
        }
    }

    #[actix_web::test]
    async fn first_row_is_the_default_selection() {
        let backend = MockBackend::returning(Ok(sample_parts()));

        let page = load_matrix_page(&backend, query(None)).await.unwrap();

        let selected = page.selected.unwrap();
        assert_eq!(selected.part_number, "P1");
        assert_eq!(selected.cells.len(), 31);
        assert_eq!(selected.cells[4], 10);
        assert_eq!(selected.cells[11], 3);
        assert_eq!(selected.cells.iter().filter(|&&qty| qty != 0).count(), 2);
    }

    #[actix_web::test]
    async fn requested_part_is_selected_when_present() {
        let backend = MockBackend::returning(Ok(sample_parts()));

        let page = load_matrix_page(&backend, query(Some("P2"))).await.unwrap();

        let selected = page.selected.unwrap();
        assert_eq!(selected.part_number, "P2");
        assert!(selected.cells.iter().all(|&qty| qty == 0));
    }

    #[actix_web::test]
    async fn unknown_part_falls_back_to_the_first_row() {
        let backend = MockBackend::returning(Ok(sample_parts()));

        let page = load_matrix_page(&backend, query(Some("P9"))).await.unwrap();

        assert_eq!(page.selected.unwrap().part_number, "P1");
    }

    #[actix_web::test]
    async fn empty_result_leaves_the_selection_empty() {
        let backend = MockBackend::returning(Ok(Vec::new()));

        let page = load_matrix_page(&backend, query(None)).await.unwrap();

        assert!(page.parts.is_empty());
        assert!(page.selected.is_none());
        assert_eq!(page.days.len(), 31);
    }

    #[actix_web::test]
    async fn read_failure_degrades_to_an_empty_page() {
        let backend =
            MockBackend::returning(Err(BackendError::Application("failed".to_string())));

        let page = load_matrix_page(&backend, query(None)).await.unwrap();

        assert!(page.parts.is_empty());
        assert!(page.selected.is_none());
    }

    #[actix_web::test]
    async fn out_of_range_month_is_an_error_before_any_fetch() {
        let backend = MockBackend::returning(Ok(sample_parts()));
        let query = MatrixQuery {
            month: Some(13),
            year: Some(2025),
            version: Some(1),
            part: None,
        };

        let result = load_matrix_page(&backend, query).await;

        assert!(matches!(result, Err(ServiceError::DayGrid(_))));
        assert!(backend.response.lock().unwrap().is_some());
    }
}
