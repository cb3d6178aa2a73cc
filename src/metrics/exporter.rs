use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::S4lruMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for cache metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// directly or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn write_gauge(&self, suffix: &str, value: u64) {
        self.write_metric("gauge", suffix, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<S4lruMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &S4lruMetricsSnapshot) {
        self.write_counter("get_calls_total", snapshot.get_calls);
        self.write_counter("get_hits_total", snapshot.get_hits);
        self.write_counter("get_misses_total", snapshot.get_misses);
        self.write_counter("insert_calls_total", snapshot.insert_calls);
        self.write_counter("insert_updates_total", snapshot.insert_updates);
        self.write_counter("insert_new_total", snapshot.insert_new);
        self.write_counter("evict_calls_total", snapshot.evict_calls);
        self.write_counter("evicted_entries_total", snapshot.evicted_entries);
        self.write_counter("promotions_total", snapshot.promotions);
        self.write_counter("promotion_swaps_total", snapshot.promotion_swaps);
        self.write_counter("top_level_touches_total", snapshot.top_level_touches);
        self.write_counter("remove_calls_total", snapshot.remove_calls);
        self.write_counter("remove_found_total", snapshot.remove_found);
        for (level, len) in snapshot.segment_lens.iter().enumerate() {
            self.write_gauge(&format!("segment{}_len", level), *len as u64);
        }
        self.write_gauge("cache_len", snapshot.cache_len as u64);
        self.write_gauge("capacity", snapshot.capacity as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(prefix: &str, snapshot: &S4lruMetricsSnapshot) -> String {
        let exporter = PrometheusTextExporter::new(prefix, Vec::new());
        exporter.export(snapshot);
        String::from_utf8(exporter.into_inner()).unwrap()
    }

    #[test]
    fn counters_and_gauges_are_typed() {
        let snapshot = S4lruMetricsSnapshot {
            get_hits: 7,
            segment_lens: [1, 2, 3, 4],
            capacity: 16,
            ..Default::default()
        };
        let text = render("s4lru", &snapshot);

        assert!(text.contains("# TYPE s4lru_get_hits_total counter\ns4lru_get_hits_total 7\n"));
        assert!(text.contains("# TYPE s4lru_segment2_len gauge\ns4lru_segment2_len 3\n"));
        assert!(text.contains("s4lru_capacity 16\n"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let text = render("", &S4lruMetricsSnapshot::default());
        assert!(text.contains("\nget_calls_total 0\n"));
        assert!(!text.contains("_get_calls_total"));
    }
}
