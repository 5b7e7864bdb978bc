//! Cycle counter and histogram printing for the ignored latency tests.

use hdrhistogram::Histogram;

/// Reads the timestamp counter, or nanoseconds since first use off x86_64.
#[inline]
pub(crate) fn cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        core::arch::x86_64::__rdtscp(&mut 0)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static EPOCH: OnceLock<Instant> = OnceLock::new();
        EPOCH.get_or_init(Instant::now).elapsed().as_nanos() as u64
    }
}

/// Cycles spent in `op`.
#[inline]
pub(crate) fn measure<R>(op: impl FnOnce() -> R) -> u64 {
    let start = cycles();
    core::hint::black_box(op());
    cycles().saturating_sub(start)
}

pub(crate) fn histogram() -> Histogram<u64> {
    Histogram::new(3).expect("3 significant figures is a valid precision")
}

pub(crate) fn print_histogram(name: &str, hist: &Histogram<u64>) {
    println!(
        "{:24} p50: {:4} cycles | p99: {:4} cycles | p999: {:5} cycles | min: {:4} | max: {:5}",
        name,
        hist.value_at_quantile(0.50),
        hist.value_at_quantile(0.99),
        hist.value_at_quantile(0.999),
        hist.min(),
        hist.max(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_work_takes_time() {
        let spent = measure(|| std::thread::sleep(std::time::Duration::from_millis(2)));
        assert!(spent > 0);
    }

    #[test]
    fn counter_is_monotonic_on_one_thread() {
        let first = cycles();
        std::thread::sleep(std::time::Duration::from_millis(1));
        assert!(cycles() > first);
    }
}
