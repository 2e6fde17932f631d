//! Canned chatbot copy.

/// One scripted question and its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionAnswerEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const GREETING: &str = "Hello! I'm your AI learning assistant. I'm here to help you with skill development, business questions, and finding resources. How can I assist you today?";

pub const FALLBACK_RESPONSE: &str = "I understand your question! While I'm learning to provide better responses, I recommend checking our Skills section for detailed tutorials, or try our Voice Mode for hands-on learning. Is there a specific skill you'd like to focus on?";

pub const INPUT_PLACEHOLDER: &str = "Ask me anything about skills, business, or learning...";

pub const INPUT_HINT: &str =
    "Ask about skills, business planning, market connections, or financial assistance";

/// Quick questions in display order. Each one is answered verbatim.
pub const QUESTION_ANSWERS: [QuestionAnswerEntry; 6] = [
    QuestionAnswerEntry {
        question: "How do I start learning tailoring?",
        answer: "Great choice! To start learning tailoring, I recommend beginning with our 'Basic Stitching' module. You'll need a sewing machine, threads, needles, fabric scissors, and measuring tape. The course covers threading, basic stitches, and simple garment construction. Would you like me to enroll you in the course?",
    },
    QuestionAnswerEntry {
        question: "What materials do I need for organic farming?",
        answer: "For organic farming, you'll need organic seeds, natural fertilizers like compost or cow dung, basic farming tools (spade, hoe, watering can), and pH testing strips for soil. Our organic farming course covers soil preparation, composting, and natural pest control methods.",
    },
    QuestionAnswerEntry {
        question: "How can I find buyers for my products?",
        answer: "There are several ways to find buyers: 1) Join local women's cooperatives, 2) Use online platforms like WhatsApp Business, 3) Connect with nearby markets and shops, 4) Participate in local fairs and exhibitions. Our Market Connect feature can help you find potential buyers in your area.",
    },
    QuestionAnswerEntry {
        question: "What micro-loans are available for women entrepreneurs?",
        answer: "Several micro-loan options are available: 1) Mudra Loans (up to ₹10 lakhs), 2) Stand-Up India Scheme, 3) Mahila Udyam Nidhi Scheme, 4) Local Self Help Group loans. I can help you find the best option based on your business needs and location.",
    },
    QuestionAnswerEntry {
        question: "How do I price my handmade products?",
        answer: "To price handmade products: 1) Calculate material costs, 2) Add labor costs (your time × fair hourly rate), 3) Include overhead costs (10-15%), 4) Add profit margin (20-30%), 5) Research competitor pricing. Our Product Helper can generate pricing suggestions for your specific items.",
    },
    QuestionAnswerEntry {
        question: "Can you help me with digital marketing?",
        answer: "Absolutely! Digital marketing for small businesses includes: 1) Creating WhatsApp Business profile, 2) Using Facebook and Instagram for product photos, 3) Joining local community groups, 4) Getting customer reviews and testimonials. Would you like specific guidance for your product type?",
    },
];
