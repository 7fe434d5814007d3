use crate::domain::model::ProducerWin;
use indexmap::IndexMap;

/// Producer name -> winning years, keyed in first-appearance order.
/// Years are appended in input order and never deduplicated; a producer
/// winning twice in the same year keeps both entries.
pub type YearsByProducer = IndexMap<String, Vec<i32>>;

pub fn years_by_producer(wins: &[ProducerWin]) -> YearsByProducer {
    let mut by_producer = YearsByProducer::new();

    for win in wins {
        if win.producer.is_empty() {
            continue;
        }

        by_producer
            .entry(win.producer.clone())
            .or_default()
            .push(win.year);
    }

    by_producer
}
