use crate::domain::chat::{ChatMessage, ChatRequest};
use crate::domain::model::{CardDraw, Reading};

pub const SYSTEM_PROMPT: &str = "\
你是一位資深且富有同理心的塔羅牌占卜師，擅長結合東方水墨的禪意與西方塔羅的智慧。
你的任務是根據使用者抽出的「過去、現在、未來」三張牌陣，為他們的問題提供深度解析與指引。
請使用溫暖、神祕但堅定的語氣。
**重要：請直接以 HTML 格式輸出內容**，使用 <p> 分段，用 <strong> 或 <b> 強調重點，用 <hr> 分隔區塊。不需要DOCTYPE或html、body標籤。
結構要求：
1. 先用一段話回應使用者的問題。
2. 用 <hr> 分隔線。
3. 依序針對過去、現在、未來進行綜合解讀，說明它們之間的因果流動。不要只是單獨解釋每張牌，要把它們串連成一個故事。
4. 最後給出一個總結性的建議或祝福。";

const CLOSING_INSTRUCTION: &str = "請大師開始解讀。";

pub fn render_card_line(card: &CardDraw) -> String {
    format!(
        "【{}】：{} {} (牌義參考: {})",
        card.position, card.card_name, card.status_text, card.desc
    )
}

/// 每張牌一行，維持抽牌順序
pub fn render_card_lines(cards: &[CardDraw]) -> String {
    cards
        .iter()
        .map(render_card_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_user_prompt(question: &str, card_lines: &str) -> String {
    format!(
        "求卜者的問題是：「{}」\n抽出的牌陣如下：\n{}\n\n{}",
        question, card_lines, CLOSING_INSTRUCTION
    )
}

pub fn build_chat_request(reading: &Reading, model: &str, temperature: f64) -> ChatRequest {
    let card_lines = render_card_lines(&reading.cards);

    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(&reading.question, &card_lines)),
        ],
        temperature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::ChatRole;

    fn card(position: &str, name: &str, status: &str, desc: &str) -> CardDraw {
        CardDraw {
            position: position.to_string(),
            card_name: name.to_string(),
            status_text: status.to_string(),
            desc: desc.to_string(),
        }
    }

    fn three_card_reading() -> Reading {
        Reading {
            question: "我該換工作嗎？".to_string(),
            cards: vec![
                card("過去", "愚者", "正位", "新的開始"),
                card("現在", "塔", "逆位", "延遲的變動"),
                card("未來", "星星", "正位", "希望"),
            ],
        }
    }

    #[test]
    fn test_render_card_line_format() {
        let line = render_card_line(&card("過去", "愚者", "正位", "新的開始"));
        assert_eq!(line, "【過去】：愚者 正位 (牌義參考: 新的開始)");
    }

    #[test]
    fn test_render_card_lines_keeps_input_order() {
        let reading = three_card_reading();
        let lines = render_card_lines(&reading.cards);
        let lines: Vec<&str> = lines.split('\n').collect();

        assert_eq!(
            lines,
            vec![
                "【過去】：愚者 正位 (牌義參考: 新的開始)",
                "【現在】：塔 逆位 (牌義參考: 延遲的變動)",
                "【未來】：星星 正位 (牌義參考: 希望)",
            ]
        );
    }

    #[test]
    fn test_single_card_has_no_separator() {
        let lines = render_card_lines(&[card("現在", "月亮", "正位", "不安")]);
        assert!(!lines.contains('\n'));
    }

    #[test]
    fn test_user_prompt_embeds_question_and_card_lines() {
        let reading = three_card_reading();
        let prompt = build_user_prompt(&reading.question, &render_card_lines(&reading.cards));

        assert!(prompt.contains("「我該換工作嗎？」"));
        assert!(prompt.ends_with(CLOSING_INSTRUCTION));

        let card_lines: Vec<&str> = prompt
            .lines()
            .filter(|line| line.starts_with('【'))
            .collect();
        assert_eq!(card_lines.len(), 3);
        assert!(card_lines[0].starts_with("【過去】"));
        assert!(card_lines[1].starts_with("【現在】"));
        assert!(card_lines[2].starts_with("【未來】"));
    }

    #[test]
    fn test_chat_request_has_system_then_user() {
        let request = build_chat_request(&three_card_reading(), "gpt-3.5-turbo", 0.7);

        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, ChatRole::User);
        assert!(request.messages[1].content.contains("【未來】：星星 正位 (牌義參考: 希望)"));
    }

    #[test]
    fn test_system_prompt_constrains_html_output() {
        assert!(SYSTEM_PROMPT.contains("<p>"));
        assert!(SYSTEM_PROMPT.contains("<hr>"));
        assert!(SYSTEM_PROMPT.contains("<strong>"));
        assert!(SYSTEM_PROMPT.contains("不需要DOCTYPE"));
    }
}
