use lesson_core::model::{LessonContent, QuizItem};
use lesson_core::time::millis;

use super::test_harness::setup_view_harness;

fn quiz_html(items: Vec<QuizItem>) -> String {
    let content = LessonContent {
        quiz: items,
        ..LessonContent::bundled()
    };
    let mut harness = setup_view_harness(content);
    harness.advance_to(6);
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_slide_renders_title_and_characters() {
    let harness = setup_view_harness(LessonContent::bundled());
    let html = harness.render();
    assert!(html.contains("数字大冒险"), "missing title in {html}");
    assert!(html.contains("开始冒险"), "missing start button in {html}");
    assert!(html.contains("character-prime"), "missing prime character in {html}");
    assert!(html.contains(" 和 "), "missing tagline join in {html}");
    assert!(!html.contains("重新开始"), "welcome should not offer restart: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn intro_prime_slide_shows_autoplay_divider() {
    let mut harness = setup_view_harness(LessonContent::bundled());
    harness.advance_to(1);
    let html = harness.render();
    assert!(html.contains("这是数字 2"), "missing intro title in {html}");
    assert!(html.contains("divider-grid"), "missing divider in {html}");
    assert!(html.contains("自己动手"), "missing manual toggle in {html}");

    harness.with_lesson(|lesson| {
        lesson.advance_time(millis(2500));
    });
    let html = harness.render();
    assert!(html.contains("排成 1 列"), "missing first step caption in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn manual_mode_offers_column_buttons() {
    let mut harness = setup_view_harness(LessonContent::bundled());
    harness.advance_to(3);
    harness.with_lesson(|lesson| {
        lesson.set_autoplay(false).expect("visualizer on slide");
        lesson.set_columns(2).expect("two columns fit four");
    });
    let html = harness.render();
    assert!(
        html.contains("除了 1 和 4，它还有一个朋友：2。"),
        "missing composite friends line in {html}"
    );
    assert!(html.contains("分 2 组 ✅"), "missing selected button in {html}");
    assert!(html.contains("它还能被 2 整除"), "missing extra factor note in {html}");
    assert!(!html.contains("分 5 组"), "offered more columns than items: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn comparison_slide_lists_examples() {
    let mut harness = setup_view_harness(LessonContent::bundled());
    harness.advance_to(5);
    let html = harness.render();
    assert!(html.contains("记住区别"), "missing title in {html}");
    assert!(html.contains("⭐️ 比如: 2, 3, 5, 7, 11"), "missing prime examples in {html}");
    assert!(html.contains("🏘️ 比如: 4, 6, 8, 9, 10"), "missing composite examples in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_card_does_not_leak_the_answer() {
    let honest = quiz_html(vec![QuizItem::new(5, true)]);
    let mislabelled = quiz_html(vec![QuizItem::new(5, false)]);
    assert_eq!(honest, mislabelled);
    assert!(honest.contains("character-mystery"), "quiz number should be neutral: {honest}");
    assert!(!honest.contains("👑"), "crown leaked in {honest}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_feedback_then_result() {
    let mut harness = setup_view_harness(LessonContent::bundled());
    harness.advance_to(6);
    harness.with_lesson(|lesson| {
        lesson.submit_answer(true).expect("on quiz");
    });
    let html = harness.render();
    assert!(html.contains("feedback correct"), "missing feedback in {html}");
    assert!(html.contains("disabled"), "answers should be disabled in {html}");

    harness.with_lesson(|lesson| {
        lesson.advance_time(millis(1500));
        for claim in [false, true, false, true, false, true, false] {
            lesson.submit_answer(claim).expect("on quiz");
            lesson.advance_time(millis(1500));
        }
    });
    let html = harness.render();
    assert!(html.contains("你答对了 8 题中的 8 题！"), "missing score in {html}");
    assert!(html.contains("数学小天才"), "missing celebration in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_returns_to_welcome() {
    let mut harness = setup_view_harness(LessonContent::bundled());
    harness.advance_to(4);
    harness.with_lesson(|lesson| {
        lesson.reset();
    });
    let html = harness.render();
    assert!(html.contains("开始冒险"), "missing welcome in {html}");
}
