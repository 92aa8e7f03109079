use reader_layout::{LayoutConfig, PaginationMode};

pub const CHAPTER_TITLE: &str = "第一章 山雨欲来";

const SENTENCES: &[&str] = &[
    "夜色渐深，城南的老街上只剩下几盏昏黄的灯。",
    "他抬头看了看钟楼，时针指向11点45分，比约定的时间晚了整整20分钟。",
    "“你终于来了。”她从阴影里走出来，声音很轻，却让人心头一紧。",
    "桌上摊着一本旧书，扉页上写着Rust Programming Language几个字。",
    "雨点开始落下，打在青石板上，溅起细小的水花；远处传来犬吠声。",
    "他们沿着河岸走了大约3000米，才在一座石桥边停下脚步（桥下水声潺潺）。",
    "《山海经》里记载的那些异兽，或许并不全是虚构的传说！",
    "她说：“明天早上8点，我们在码头见面，带上那张地图。”",
];

/// Deterministic pseudo-chapter of `paragraphs` paragraphs separated by CRLF.
pub fn sample_chapter(paragraphs: usize) -> String {
    let mut out = String::new();
    for idx in 0..paragraphs {
        if idx > 0 {
            out.push_str("\r\n");
        }
        out.push_str("\u{3000}\u{3000}");
        let sentence_count = 1 + (idx * 7) % 5;
        for offset in 0..sentence_count {
            out.push_str(SENTENCES[(idx + offset * 3) % SENTENCES.len()]);
        }
    }
    out
}

/// Small phone-like viewport used across integration tests.
pub fn phone_config() -> LayoutConfig {
    LayoutConfig {
        width: 327.0,
        height: 511.0,
        padding_h: 20.0,
        padding_v: 20.0,
        font_size: 20.0,
        line_height: 1.8,
        paragraph_gap: 16.0,
        title_size: 28.0,
        title_line_height: 1.8,
        title_gap: 24.0,
        mode: PaginationMode::Page,
        ..LayoutConfig::default()
    }
}
