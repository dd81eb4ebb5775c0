mod groq;

pub use groq::GroqProvider;
