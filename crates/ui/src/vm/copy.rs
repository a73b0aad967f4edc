//! Bundled lesson copy (Simplified Chinese).

use lesson_core::divisor::ExplanationCategory;
use lesson_core::primality::NumberKind;

pub const APP_TITLE: &str = "数字大冒险";
pub const WELCOME_TAGLINE_PREFIX: &str = "探索";
pub const PRIME_LABEL: &str = "素数 (Primes)";
pub const WELCOME_TAGLINE_JOIN: &str = " 和 ";
pub const COMPOSITE_LABEL: &str = "合数 (Composites)";
pub const WELCOME_TAGLINE_SUFFIX: &str = "的秘密！";
pub const START_BUTTON: &str = "开始冒险";

pub const INTRO_PRIME_BADGE: &str = "认识主角";
pub const INTRO_PRIME_BODY: &str = "它是最小的素数。它很特别，因为它很\"孤独\"。试着把它分给朋友们？";
pub const INTRO_PRIME_NOTE: &str =
    "看！它只能排成 1 列（整除1），或者排成 2 列（整除自己）。只有2个朋友（因数）的数字叫做素数。";
pub const INTRO_PRIME_NEXT: &str = "认识其他素数";

pub const PRIMES_TITLE: &str = "素数俱乐部";
pub const PRIMES_BODY: &str = "这些数字也只有两个朋友（1和它们自己）：";
pub const PRIMES_NOTE: &str = "它们很难被平均分组，除了排成一长队！";
pub const PRIMES_NEXT: &str = "看看另一种数字";

pub const INTRO_COMPOSITE_BADGE: &str = "认识团队成员";
pub const INTRO_COMPOSITE_BODY: &str = "它是合数。它喜欢交朋友，因为它可以被别的数字整除！";
pub const INTRO_COMPOSITE_NOTE: &str = "朋友超过2个的数字叫做合数。";
pub const INTRO_COMPOSITE_NEXT: &str = "还有谁是合数？";

pub const COMPOSITES_TITLE: &str = "合数大家庭";
pub const COMPOSITES_BODY: &str = "这些数字可以排成各种形状的队伍：";
pub const COMPOSITES_NEXT: &str = "总结一下";

pub const COMPARISON_TITLE: &str = "记住区别";
pub const COMPARISON_PRIME_HEADING: &str = "素数 (Prime)";
pub const COMPARISON_PRIME_POINTS: [&str; 2] = ["👑 只有两个因数", "☝️ 只能被 1 和它自己整除"];
pub const COMPARISON_COMPOSITE_HEADING: &str = "合数 (Composite)";
pub const COMPARISON_COMPOSITE_POINTS: [&str; 2] = ["🤝 有很多因数 (超过2个)", "🧱 可以被其他数字整除"];
pub const COMPARISON_NEXT: &str = "来挑战小测验！";

pub const QUIZ_PROMPT: &str = "这个数字是素数还是合数？";
pub const QUIZ_PRIME_BUTTON: &str = "素数 (Prime)";
pub const QUIZ_PRIME_HINT: &str = "只有 1 和它自己";
pub const QUIZ_COMPOSITE_BUTTON: &str = "合数 (Composite)";
pub const QUIZ_COMPOSITE_HINT: &str = "还有别的队！";
pub const QUIZ_DONE_TITLE: &str = "挑战完成！";
pub const QUIZ_PERFECT: &str = "太棒了！你是数学小天才！🌟";
pub const QUIZ_KEEP_GOING: &str = "继续加油！";
pub const QUIZ_RESTART: &str = "再玩一次";

pub const DIVIDER_MANUAL_PROMPT: &str = "试着把它们分组!";
pub const AUTOPLAY_BUTTON: &str = "▶ 自动演示";
pub const MANUAL_BUTTON: &str = "✋ 自己动手";
pub const LESSON_UNAVAILABLE: &str = "课程内容无法加载";
pub const RESTART_LABEL: &str = "重新开始";

#[must_use]
pub fn intro_title(value: u32) -> String {
    format!("这是数字 {value}")
}

#[must_use]
pub fn kind_label(kind: NumberKind) -> &'static str {
    match kind {
        NumberKind::Prime => "素数",
        NumberKind::Composite => "合数",
    }
}

fn join_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn examples_line(kind: NumberKind, examples: &[u32]) -> String {
    let icon = match kind {
        NumberKind::Prime => "⭐️",
        NumberKind::Composite => "🏘️",
    };
    format!("{icon} 比如: {}", join_numbers(examples))
}

/// Names the divisors of a composite besides 1 and itself.
/// `None` when `friends` is empty.
#[must_use]
pub fn composite_friends_line(value: u32, friends: &[u32]) -> Option<String> {
    let first = friends.first()?;
    let who = if friends.len() == 1 {
        "一个朋友"
    } else {
        "这些朋友"
    };
    Some(format!(
        "它可以排成 {first} 列！除了 1 和 {value}，它还有{who}：{}。",
        join_numbers(friends)
    ))
}

/// Caption for one autoplay step.
#[must_use]
pub fn explanation_text(columns: u32, category: ExplanationCategory) -> String {
    match category {
        ExplanationCategory::FirstStep => "排成 1 列... 每个人都在一队！".to_string(),
        ExplanationCategory::LastStep => format!("排成 {columns} 列... 每个人自己一队！"),
        ExplanationCategory::ExactFit => format!("✅ 哇！可以平均分成 {columns} 列！是合数！"),
        ExplanationCategory::NotExact { remainder } => {
            format!("❌ 哎呀，分成 {columns} 列会剩下 {remainder} 个...")
        }
    }
}

#[must_use]
pub fn column_button_label(columns: u32) -> String {
    format!("分 {columns} 组")
}

#[must_use]
pub fn extra_factor_note(columns: u32) -> String {
    format!("看！除了1和它自己，它还能被 {columns} 整除！")
}

#[must_use]
pub fn score_line(correct: usize, total: usize) -> String {
    format!("你答对了 {total} 题中的 {correct} 题！")
}
