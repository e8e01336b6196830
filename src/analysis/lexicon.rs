//! Static keyword vocabulary for the analyzers.
//!
//! All lists are compile-time constants and never mutate; analyzers receive
//! them by reference so tests and embedders can substitute their own.

/// Methodology labels matched verbatim (case-insensitive) in the full text.
pub const METHODOLOGY_TERMS: &[&str] = &["qualitative", "quantitative", "mixed methods"];

/// Statistical packages and estimators. Entries like `" SEM "` include
/// surrounding spaces as crude word-boundary guards; keep them byte-exact.
pub const ANALYSIS_TOOL_TERMS: &[&str] = &[
    "SPSS",
    "AMOS",
    "Stata ",
    " SEM ",
    "regression",
    "correlation",
    "2SLS",
    " OLS ",
    "EViews",
    "PLS-SEM",
    "NVivo",
    "Python",
    " R ",
    "Panel Regression",
    "Logit",
    "Probit",
    "Sobel",
];

/// Theoretical frameworks, grouped by field.
pub const FRAMEWORK_TERMS: &[&str] = &[
    // Corporate governance & management
    "agency theory",
    "stewardship theory",
    "stakeholder theory",
    "resource dependence theory",
    "institutional theory",
    "signaling theory",
    "upper echelons theory",
    "transaction cost theory",
    "managerial hegemony theory",
    "social contract theory",
    "political cost theory",
    "legitimacy theory",
    "contingency theory",
    "critical theory",
    "role theory",
    // Behavioral & psychological
    "theory of planned behavior",
    "TPB",
    "theory of reasoned action",
    " TRA ",
    "expectancy theory",
    "equity theory",
    "goal-setting theory",
    "social cognitive theory",
    "prospect theory",
    "cognitive dissonance theory",
    "motivation-hygiene theory",
    // Economic & financial
    "efficient market hypothesis",
    "pecking order theory",
    "trade-off theory",
    "market timing theory",
    "modigliani miller theorem",
    "random walk theory",
    "portfolio theory",
    "capital asset pricing model",
    "CAPM",
    "arbitrage pricing theory",
    "option pricing theory",
    "real options theory",
    // Accounting & auditing
    "positive accounting theory",
    "normative accounting theory",
    "accountability theory",
    "audit expectation gap theory",
    "agency cost theory",
    "accounting conservatism theory",
    "public interest theory",
    "capture theory",
    // Strategy & resource-based views
    "RBV",
    "resource-based view",
    "dynamic capabilities theory",
    "core competence theory",
    "blue ocean strategy",
    "disruptive innovation theory",
    "strategic alignment model",
    // Ethics, CSR, sustainability
    "triple bottom line",
    "stakeholder-agency theory",
    "carroll's csr pyramid",
    "corporate social performance theory",
    "sustainable development theory",
    // Communication & information
    "media richness theory",
    "information asymmetry theory",
    "diffusion of innovations theory",
    // Organizational
    "open systems theory",
    "chaos theory",
    "systems theory",
    "organizational learning theory",
    "learning organization theory",
    "bureaucratic theory",
    "scientific management theory",
    "X and Y theory",
    "path-goal theory",
    "transformational leadership theory",
    "servant leadership theory",
];

/// Indicators that a study works on pre-existing datasets.
pub const SECONDARY_DATA_TERMS: &[&str] = &[
    "secondary data",
    "archival",
    "panel data",
    "financial statements",
    "firm year observations",
    "annual reports",
];

/// Indicators of data collected in the field.
pub const PRIMARY_DATA_TERMS: &[&str] = &[
    "survey",
    "interview",
    "questionnaire",
    "respondents",
    "participants",
    "n=",
];

/// Phrases that introduce a reported finding inside an abstract sentence.
pub const FINDING_INDICATORS: &[&str] = &[
    "findings reveal",
    "this study shows",
    "results indicate",
    "we find that",
    "empirical results suggest",
    "the research contributes",
    "reveals that",
    "confirms that",
    "our findings",
    "offers",
    "draws attention",
];

/// Generic academic filler counted by the writing-style heuristic.
pub const AI_PHRASES: &[&str] = &[
    "this study aims to",
    "it is important to note that",
    "the results indicate that",
    "the findings suggest that",
    "in conclusion",
    "this paper highlights",
];

/// The complete keyword configuration injected into the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub methodology: &'static [&'static str],
    pub analysis_tools: &'static [&'static str],
    pub frameworks: &'static [&'static str],
    pub secondary_data: &'static [&'static str],
    pub primary_data: &'static [&'static str],
    pub finding_indicators: &'static [&'static str],
    pub ai_phrases: &'static [&'static str],
}

impl Lexicon {
    /// The standard screening vocabulary.
    pub const STANDARD: Lexicon = Lexicon {
        methodology: METHODOLOGY_TERMS,
        analysis_tools: ANALYSIS_TOOL_TERMS,
        frameworks: FRAMEWORK_TERMS,
        secondary_data: SECONDARY_DATA_TERMS,
        primary_data: PRIMARY_DATA_TERMS,
        finding_indicators: FINDING_INDICATORS,
        ai_phrases: AI_PHRASES,
    };
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::STANDARD
    }
}
