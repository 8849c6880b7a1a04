//! Live impact counter

use dioxus::prelude::*;

/// Tonnes retired at launch of the current reporting period.
pub const BASELINE_TONNES: f64 = 2_400_000.0;

/// Programme-wide retirement rate, tonnes per second.
pub const TONNES_PER_SECOND: f64 = 0.5;

/// Render a tonne count as megatonnes, e.g. `2.4M`.
pub fn format_megatonnes(tonnes: f64) -> String {
    format!("{:.1}M", tonnes / 1_000_000.0)
}

/// Hero counter ticking up once per second from the programme baseline.
#[component]
pub fn ImpactCounter() -> Element {
    let mut tonnes = use_signal(|| BASELINE_TONNES);

    // One tick per second for the life of the page.
    use_future(move || async move {
        #[cfg(feature = "web")]
        loop {
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            tonnes += TONNES_PER_SECOND;
        }
        #[cfg(not(feature = "web"))]
        let _ = &mut tonnes;
    });

    rsx! {
        span { id: "carbon-counter", class: "impact-counter", "{format_megatonnes(tonnes())}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_the_baseline_as_megatonnes() {
        assert_eq!(format_megatonnes(BASELINE_TONNES), "2.4M");
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(format_megatonnes(5_100_000.0), "5.1M");
        assert_eq!(format_megatonnes(2_400_000.5), "2.4M");
        assert_eq!(format_megatonnes(0.0), "0.0M");
    }
}
