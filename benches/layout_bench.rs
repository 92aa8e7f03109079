use std::alloc::{GlobalAlloc, Layout, System};
use std::hint::black_box;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use reader_layout::{CellWidthMeasurer, LayoutConfig, LayoutEngine};

const CHAPTER_TITLE: &str = "第十二章 渡口";

const CHAPTERS: &[(&str, usize)] = &[("short", 20), ("medium", 200), ("long", 800)];

const VIEWPORTS: &[(&str, f32, f32)] = &[("phone", 327.0, 511.0), ("eink", 480.0, 800.0)];

const PHRASES: &[&str] = &[
    "江水东流，渡口的船家早早点起了灯。",
    "那年冬天来得特别早，第一场雪落在11月3日的夜里。",
    "“再等一等，”老人说，“船总会来的。”",
    "书页边缘写着几行小字：Tomorrow never comes twice。",
    "他数了数口袋里的铜钱，一共是128文，刚够一张船票。",
    "风从北面吹来，带着芦苇和泥土的气味；远山隐在雾里。",
];

struct TrackingAllocator;

static CURRENT_ALLOC_BYTES: AtomicUsize = AtomicUsize::new(0);
static PEAK_ALLOC_BYTES: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL_ALLOCATOR: TrackingAllocator = TrackingAllocator;

fn current_alloc_bytes() -> usize {
    CURRENT_ALLOC_BYTES.load(Ordering::Relaxed)
}

fn peak_alloc_bytes() -> usize {
    PEAK_ALLOC_BYTES.load(Ordering::Relaxed)
}

fn reset_peak_alloc_bytes() {
    PEAK_ALLOC_BYTES.store(current_alloc_bytes(), Ordering::Relaxed);
}

fn add_current_alloc_bytes(delta: usize) {
    let current = CURRENT_ALLOC_BYTES.fetch_add(delta, Ordering::Relaxed) + delta;
    PEAK_ALLOC_BYTES.fetch_max(current, Ordering::Relaxed);
}

fn sub_current_alloc_bytes(delta: usize) {
    let _ = CURRENT_ALLOC_BYTES.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
        Some(current.saturating_sub(delta))
    });
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            add_current_alloc_bytes(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        sub_current_alloc_bytes(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            if new_size >= layout.size() {
                add_current_alloc_bytes(new_size - layout.size());
            } else {
                sub_current_alloc_bytes(layout.size() - new_size);
            }
        }
        new_ptr
    }
}

struct CaseResult {
    chapter: String,
    viewport: String,
    case: &'static str,
    iterations: usize,
    min_ns: u128,
    median_ns: u128,
    max_ns: u128,
    median_peak_heap_bytes: usize,
    pages: usize,
}

fn median<T: Copy>(sorted: &[T]) -> T {
    sorted[sorted.len() / 2]
}

fn chapter_text(paragraphs: usize) -> String {
    let mut out = String::new();
    for idx in 0..paragraphs {
        if idx > 0 {
            out.push_str("\r\n");
        }
        for offset in 0..=(idx % 4) {
            out.push_str(PHRASES[(idx * 5 + offset) % PHRASES.len()]);
        }
    }
    out
}

fn run_case<F>(
    chapter: &str,
    viewport: &str,
    case: &'static str,
    warmup_iters: usize,
    measure_iters: usize,
    mut op: F,
) -> CaseResult
where
    F: FnMut() -> usize,
{
    let mut pages = 0;
    for _ in 0..warmup_iters {
        pages = black_box(op());
    }

    let mut time_samples = Vec::with_capacity(measure_iters);
    let mut mem_samples = Vec::with_capacity(measure_iters);
    for _ in 0..measure_iters {
        let baseline_alloc = current_alloc_bytes();
        reset_peak_alloc_bytes();
        let start = Instant::now();
        pages = black_box(op());
        time_samples.push(start.elapsed().as_nanos());
        mem_samples.push(peak_alloc_bytes().saturating_sub(baseline_alloc));
    }

    time_samples.sort_unstable();
    mem_samples.sort_unstable();

    CaseResult {
        chapter: chapter.to_string(),
        viewport: viewport.to_string(),
        case,
        iterations: measure_iters,
        min_ns: time_samples[0],
        median_ns: median(&time_samples),
        max_ns: time_samples[time_samples.len() - 1],
        median_peak_heap_bytes: median(&mem_samples),
        pages,
    }
}

fn main() {
    let quick = std::env::args().any(|arg| arg == "--quick");
    let warmup_iters = if quick { 1 } else { 2 };
    let measure_iters = if quick { 3 } else { 10 };

    println!("# reader-layout benchmark");
    println!(
        "# mode={} warmup_iters={} measure_iters={}",
        if quick { "quick" } else { "full" },
        warmup_iters,
        measure_iters
    );
    println!("chapter,viewport,case,iterations,min_ns,median_ns,max_ns,median_peak_heap_bytes,pages");

    let measurer = Arc::new(CellWidthMeasurer::default());
    let mut results = Vec::new();
    for (chapter_key, paragraphs) in CHAPTERS {
        let content = chapter_text(*paragraphs);
        for (viewport_key, width, height) in VIEWPORTS {
            let cfg = LayoutConfig::for_viewport(*width, *height);
            let fast_cfg = LayoutConfig {
                fast: true,
                ..cfg.clone()
            };

            results.push(run_case(
                chapter_key,
                viewport_key,
                "layout_cold",
                warmup_iters,
                measure_iters,
                || {
                    let mut engine = LayoutEngine::new(measurer.clone());
                    engine
                        .layout(&content, Some(CHAPTER_TITLE), &cfg)
                        .unwrap_or_else(|e| panic!("layout failed: {}", e))
                        .len()
                },
            ));

            let mut warm = LayoutEngine::new(measurer.clone());
            results.push(run_case(
                chapter_key,
                viewport_key,
                "layout_warm_geometry",
                warmup_iters,
                measure_iters,
                || {
                    warm.layout(&content, Some(CHAPTER_TITLE), &cfg)
                        .unwrap_or_else(|e| panic!("layout failed: {}", e))
                        .len()
                },
            ));

            results.push(run_case(
                chapter_key,
                viewport_key,
                "layout_fast",
                warmup_iters,
                measure_iters,
                || {
                    let mut engine = LayoutEngine::new(measurer.clone());
                    engine
                        .layout(&content, Some(CHAPTER_TITLE), &fast_cfg)
                        .unwrap_or_else(|e| panic!("layout failed: {}", e))
                        .len()
                },
            ));
        }
    }

    for result in &results {
        println!(
            "{},{},{},{},{},{},{},{},{}",
            result.chapter,
            result.viewport,
            result.case,
            result.iterations,
            result.min_ns,
            result.median_ns,
            result.max_ns,
            result.median_peak_heap_bytes,
            result.pages
        );
    }
}
