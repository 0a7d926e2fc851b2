/// Placeholder stored for any slot the user did not fill.
pub const NOT_SPECIFIED: &str = "미지정";

#[derive(Debug, Clone, PartialEq)]
pub enum ReservationStatus {
    Received,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Received => "접수완료",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRecord {
    pub timestamp: String,
    pub people_count: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub contact_number: String,
    pub status: ReservationStatus,
}

impl ReservationRecord {
    /// Spreadsheet row in column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.people_count.clone(),
            self.preferred_date.clone(),
            self.preferred_time.clone(),
            self.contact_number.clone(),
            self.status.as_str().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_row_column_order() {
        let record = ReservationRecord {
            timestamp: "2025. 1. 1. 오후 2:00:00".to_string(),
            people_count: "10".to_string(),
            preferred_date: "2025-01-01".to_string(),
            preferred_time: "14:00".to_string(),
            contact_number: "010-1111-2222".to_string(),
            status: ReservationStatus::Received,
        };

        assert_eq!(
            record.to_row(),
            vec![
                "2025. 1. 1. 오후 2:00:00",
                "10",
                "2025-01-01",
                "14:00",
                "010-1111-2222",
                "접수완료",
            ]
        );
    }
}
