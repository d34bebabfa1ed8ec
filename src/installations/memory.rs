use std::sync::LazyLock;

use log::debug;
use regex::Regex;

pub const MIN_MEMORY_MB: u32 = 2048;
pub const MAX_MEMORY_MB: u32 = 16384;
pub const MEMORY_STEP_MB: u32 = 1024;
pub const DEFAULT_MEMORY_MB: u32 = 4096;

static MAX_HEAP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-Xmx(\d+)G").expect("static -Xmx pattern"));

/// Java heap size plus the JVM argument line that mirrors it.
///
/// `memory_mb` is the source of truth. Writing it regenerates the `-Xms`/`-Xmx`
/// pair inside the argument line; writing the argument line only feeds back into
/// `memory_mb` when it carries a usable `-Xmx<N>G` token, and never rewrites the
/// text the user typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryAllocation {
    memory_mb: u32,
    jvm_args: String,
}

impl Default for MemoryAllocation {
    fn default() -> Self {
        Self {
            memory_mb: DEFAULT_MEMORY_MB,
            jvm_args: heap_flags(DEFAULT_MEMORY_MB),
        }
    }
}

impl MemoryAllocation {
    pub fn memory_mb(&self) -> u32 {
        self.memory_mb
    }

    pub fn jvm_args(&self) -> &str {
        &self.jvm_args
    }

    /// Slider and number-field entry point. Out-of-range input is clamped, never rejected.
    pub fn set_memory_mb(&mut self, value: i64) {
        let snapped = snap_memory_mb(value);
        let others = strip_heap_flags(&self.jvm_args);
        self.jvm_args = format!("{} {}", heap_flags(snapped), others)
            .trim()
            .to_owned();
        self.memory_mb = snapped;
        debug!("memory: set to {} MB, args now {:?}", snapped, self.jvm_args);
    }

    /// Text-field entry point. The text is kept verbatim even when it cannot be parsed.
    pub fn set_jvm_args(&mut self, text: impl Into<String>) {
        self.jvm_args = text.into();
        if let Some(memory_mb) = parse_max_heap_mb(&self.jvm_args) {
            if memory_mb != self.memory_mb {
                debug!("memory: picked up {} MB from JVM args", memory_mb);
            }
            self.memory_mb = memory_mb;
        }
    }

    /// Position of the current value along the slider track, in `0.0..=1.0`.
    pub fn fill_fraction(&self) -> f32 {
        (self.memory_mb - MIN_MEMORY_MB) as f32 / (MAX_MEMORY_MB - MIN_MEMORY_MB) as f32
    }
}

/// Clamp into the supported range, then round to the nearest whole gigabyte.
#[must_use]
pub fn snap_memory_mb(value: i64) -> u32 {
    let clamped = value.clamp(i64::from(MIN_MEMORY_MB), i64::from(MAX_MEMORY_MB));
    let step = i64::from(MEMORY_STEP_MB);
    let snapped = (clamped + step / 2) / step * step;
    // Both bounds are whole steps, so rounding cannot leave the range.
    snapped as u32
}

/// Extract the heap size from the first `-Xmx<N>G` token if it lies in range.
#[must_use]
pub fn parse_max_heap_mb(args: &str) -> Option<u32> {
    let captures = MAX_HEAP_PATTERN.captures(args)?;
    let gigabytes: u32 = captures.get(1)?.as_str().parse().ok()?;
    let memory_mb = gigabytes.checked_mul(MEMORY_STEP_MB)?;
    (MIN_MEMORY_MB..=MAX_MEMORY_MB)
        .contains(&memory_mb)
        .then_some(memory_mb)
}

/// Tick positions for the slider scale, derived from the range alone.
#[must_use]
pub fn memory_markers(min_mb: u32, max_mb: u32) -> Vec<u32> {
    let interval = if max_mb <= 16384 { 2048 } else { 4096 };
    (min_mb..=max_mb).step_by(interval).collect()
}

fn heap_flags(memory_mb: u32) -> String {
    let gigabytes = memory_mb / MEMORY_STEP_MB;
    format!("-Xms{gigabytes}G -Xmx{gigabytes}G")
}

/// Case-sensitive, unlike the `-Xmx` parse: `-xmx8g` survives regeneration.
fn is_heap_flag(token: &str) -> bool {
    token
        .strip_prefix("-Xm")
        .is_some_and(|rest| !rest.is_empty())
}

fn strip_heap_flags(args: &str) -> String {
    args.split_whitespace()
        .filter(|token| !is_heap_flag(token))
        .collect::<Vec<_>>()
        .join(" ")
}
