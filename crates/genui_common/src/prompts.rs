//! Example prompts and their static markdown answers
//!
//! Each prompt hits exactly one dispatcher rule, so the comparison always has
//! a mini-app on the right-hand side.

/// A selectable prompt with the text a plain chat answer would give
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamplePrompt {
    pub text: &'static str,
    pub markdown: &'static str,
}

pub const EXAMPLE_PROMPTS: [ExamplePrompt; 4] = [
    ExamplePrompt {
        text: "지금 세계 시간 알려줘",
        markdown: "## 현재 시간\n\n\
            현재 서울 시간은 **오후 3시 42분**입니다.\n\n\
            | 도시 | 시간 |\n\
            |------|------|\n\
            | 뉴욕 | 오전 1시 42분 |\n\
            | 런던 | 오전 6시 42분 |\n\
            | 도쿄 | 오후 3시 42분 |\n\n\
            > 이 정보는 답변을 작성한 시점 기준이며 자동으로 갱신되지 않습니다.",
    },
    ExamplePrompt {
        text: "프랙탈이 뭔지 보여줘",
        markdown: "## 프랙탈이란?\n\n\
            프랙탈은 **자기유사성**을 가진 기하학적 구조입니다. \
            부분을 확대하면 전체와 비슷한 모양이 계속 나타납니다.\n\n\
            ### 시에르핀스키 삼각형\n\
            1. 정삼각형 하나에서 시작합니다.\n\
            2. 각 변의 중점을 이어 가운데 삼각형을 제거합니다.\n\
            3. 남은 3개의 삼각형에 같은 과정을 반복합니다.\n\n\
            - n번 반복하면 삼각형은 3^n개가 됩니다.\n\
            - 하우스도르프 차원은 log 3 / log 2 ≈ 1.585입니다.",
    },
    ExamplePrompt {
        text: "아이에게 덧셈을 가르쳐줘",
        markdown: "## 덧셈 배우기\n\n\
            덧셈은 두 수를 **합치는** 것입니다.\n\n\
            ### 예시\n\
            - 🍎🍎 + 🍎🍎🍎 = 🍎🍎🍎🍎🍎\n\
            - 2 + 3 = 5\n\n\
            ### 연습 문제\n\
            1. 1 + 4 = ?\n\
            2. 3 + 3 = ?\n\
            3. 5 + 2 = ?\n\n\
            정답: 5, 6, 7",
    },
    ExamplePrompt {
        text: "메모리 카드 짝 맞추기 하자",
        markdown: "## 메모리 게임 규칙\n\n\
            1. 16장의 카드가 뒤집힌 채로 놓여 있습니다.\n\
            2. 카드 두 장을 골라 뒤집습니다.\n\
            3. 같은 그림이면 짝이 맞춰집니다.\n\
            4. 다르면 다시 뒤집힙니다.\n\
            5. 8쌍을 모두 맞추면 승리!\n\n\
            > 텍스트로는 실제로 게임을 할 수 없습니다.",
    },
];
