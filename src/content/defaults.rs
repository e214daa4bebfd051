//! Built-in fallback document
//!
//! This is the last level of content resolution, so it must always be a
//! complete, valid document.

use indexmap::IndexMap;

use super::schema::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn stat(label: &str, value: &str) -> HeroStat {
    HeroStat {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn skill(name: &str, category: &str, level: i64) -> Skill {
    Skill {
        name: name.to_string(),
        category: category.to_string(),
        level,
    }
}

fn embed(kind: EmbedKind, fallback_text: &str) -> Option<Embed> {
    Some(Embed {
        kind,
        url: String::new(),
        fallback_text: fallback_text.to_string(),
    })
}

/// The document served when nothing has been saved and no static file exists
pub fn default_content() -> SiteContent {
    SiteContent {
        site_settings: SiteSettings {
            name: "Prabin Pandey".to_string(),
            domain: "www.prabin.com".to_string(),
            tagline: "Finance x Data x AI".to_string(),
        },
        seo: Seo {
            meta_title: "Prabin Pandey - Finance, Data & AI Portfolio".to_string(),
            meta_description: "MS Financial Analysis candidate at Temple University.".to_string(),
            keywords: "financial analysis, data science, AI".to_string(),
        },
        hero: hero(),
        about: about(),
        projects: projects(),
        blog: vec![BlogPost {
            id: "b1".to_string(),
            title: "Why Financial Analysts Should Learn Python".to_string(),
            date: "2025-01-15".to_string(),
            excerpt: "The financial industry is adopting Python for risk modeling to algorithmic trading. Here's why.".to_string(),
            content: "Python has become the lingua franca of quantitative finance...".to_string(),
            published: true,
            tags: strings(&["Python", "Finance"]),
        }],
        testimonials: vec![
            Testimonial {
                name: "Professor Name".to_string(),
                role: "Faculty, Fox School of Business".to_string(),
                quote: "Prabin consistently demonstrates exceptional analytical skills and deep understanding of financial modeling.".to_string(),
            },
            Testimonial {
                name: "Colleague Name".to_string(),
                role: "Sethi Clarity Advisers".to_string(),
                quote: "Prabin's ability to translate complex financial concepts into intuitive tools is remarkable.".to_string(),
            },
        ],
        contact: Contact {
            email: "prabin.pandey@temple.edu".to_string(),
            phone: "835-207-9312".to_string(),
            location: "Philadelphia, PA".to_string(),
            form_message: "I'd love to hear from you. Drop me a message about opportunities or collaborations.".to_string(),
            social: Social::new(
                "https://linkedin.com/in/prabinpandey",
                "https://github.com/prabinpandey",
            ),
        },
        resume: Resume {
            button_label: "Download Resume".to_string(),
            file_path: "/resume/Prabin_Pandey_Resume.pdf".to_string(),
        },
    }
}

fn hero() -> Hero {
    Hero {
        greeting: "Hi, I'm".to_string(),
        name: "Prabin Pandey".to_string(),
        roles: strings(&["Financial Analyst", "Data Scientist", "AI Enthusiast"]),
        description: "MS Financial Analysis candidate at Temple University's Fox School of Business. I build financial models, data dashboards, and AI-powered tools that turn complex data into clear decisions.".to_string(),
        cta_primary: "View Projects".to_string(),
        cta_secondary: "Download Resume".to_string(),
        stats: vec![
            stat("GPA", "3.98"),
            stat("Projects", "12+"),
            stat("Tools", "10+"),
            stat("CFA", "L1"),
        ],
    }
}

fn about() -> About {
    About {
        bio: "I'm a finance professional pursuing my MS in Financial Analysis at Temple University's Fox School of Business. With a strong foundation in corporate valuation, derivative pricing, and machine learning, I bridge the gap between traditional finance and cutting-edge technology.".to_string(),
        now: "Deep-diving into AI applications in portfolio management at Temple. Building financial projection tools at Sethi Clarity Advisers. Preparing for CFA Level I.".to_string(),
        education: vec![
            Education {
                school: "Temple University, Fox School of Business".to_string(),
                degree: "MS Financial Analysis".to_string(),
                period: "Expected May 2026".to_string(),
                gpa: "3.98".to_string(),
                details: "Corporate Value Management, Asset Pricing, ML in Finance, Financial Time Series, Data Science in Finance, Derivative Valuation, AI in Portfolio Management".to_string(),
                highlight: "CFA Level I Candidate".to_string(),
            },
            Education {
                school: "Tribhuvan University".to_string(),
                degree: "BBA".to_string(),
                period: "Dec 2023".to_string(),
                gpa: "3.81".to_string(),
                details: "Business Administration with focus on Finance".to_string(),
                highlight: "Valedictorian".to_string(),
            },
        ],
        experience: vec![
            Experience {
                company: "Sethi Clarity Advisers".to_string(),
                role: "Associate Financial Consultant".to_string(),
                period: "Sep 2025 - Present".to_string(),
                bullets: strings(&[
                    "Built financial projection tools (retirement income, net worth) using Bubble and Outgrow",
                    "Produced personalized recommendations using inflation/tax/income assumptions",
                    "Improved UX of interactive tools and data collection accuracy",
                ]),
            },
            Experience {
                company: "Temple University, Ambler Campus".to_string(),
                role: "IT Consultant".to_string(),
                period: "Jan 2025 - Present".to_string(),
                bullets: strings(&[
                    "Designed Power BI dashboard analyzing visitor traffic trends for budget allocation",
                    "Provided technical support and troubleshooting across campus",
                ]),
            },
            Experience {
                company: "Global IME Bank".to_string(),
                role: "Customer Relations Intern".to_string(),
                period: "Mar - May 2023".to_string(),
                bullets: strings(&[
                    "Client guidance on banking/insurance products and risk profiles",
                    "Transactions & audit documentation with Finacle CRM",
                    "Collateral evaluations for lending decisions",
                ]),
            },
        ],
        skills: vec![
            skill("Excel", "Tools", 95),
            skill("Python", "Code", 85),
            skill("Power BI", "Viz", 90),
            skill("Tableau", "Viz", 85),
            skill("MySQL", "Code", 75),
            skill("R", "Code", 70),
            skill("Bloomberg", "Finance", 80),
            skill("FactSet", "Finance", 75),
            skill("Capital IQ", "Finance", 75),
        ],
        certifications: strings(&["CFA Level I Candidate"]),
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "pe-model".to_string(),
            title: "Private Equity Transaction & Debt Covenant Model".to_string(),
            category: "Excel".to_string(),
            year: "2024".to_string(),
            summary: "Full 3-statement financial model with LBO analysis, debt covenant testing, and sensitivity scenarios.".to_string(),
            tags: strings(&["Financial Modeling", "LBO", "Debt Covenants"]),
            tools: strings(&["Excel"]),
            metrics: strings(&["3-statement model", "5+ scenarios", "Debt/EBITDA covenants"]),
            featured: true,
            is_gen_ai: None,
            case_study: CaseStudy {
                problem: "Evaluate an LBO opportunity requiring comprehensive financial modeling with debt covenant compliance.".to_string(),
                approach: "Built integrated 3-statement model with dynamic assumptions, multiple debt tranches, and scenario frameworks.".to_string(),
                data: "Historical financials, comparable transactions, market rates, industry benchmarks.".to_string(),
                methods: "IS/BS/CF integration; Debt waterfall; 2-way sensitivity tables; Covenant compliance dashboards.".to_string(),
                results: "Fully dynamic model enabling rapid scenario testing. Identified optimal leverage ratios under stress.".to_string(),
                learnings: "PE deal structuring, operational performance vs debt service interplay, covenant threshold dynamics.".to_string(),
            },
            links: IndexMap::new(),
            embed: None,
        },
        Project {
            id: "pbi-dash".to_string(),
            title: "Visitor Traffic Dashboard - Temple University".to_string(),
            category: "Power BI".to_string(),
            year: "2025".to_string(),
            summary: "Interactive Power BI dashboard analyzing campus visitor patterns for budget allocation and resource planning.".to_string(),
            tags: strings(&["Data Viz", "BI", "Analytics"]),
            tools: strings(&["Power BI", "Excel", "SQL"]),
            metrics: strings(&["Real-time insights", "Budget optimization", "Trend analysis"]),
            featured: true,
            is_gen_ai: None,
            case_study: CaseStudy {
                problem: "Campus leadership needed data-driven insights into visitor patterns for resource allocation.".to_string(),
                approach: "Interactive dashboards with drill-downs, time-series analysis, and comparative views.".to_string(),
                data: "Visitor logs, scheduling data, historical traffic records.".to_string(),
                methods: "DAX for YoY comparisons, rolling averages, peak detection. Interactive slicers.".to_string(),
                results: "Enabled data-driven budget discussions. Identified peak periods and underutilized slots.".to_string(),
                learnings: "Power BI analytics and translating operational data into executive insights.".to_string(),
            },
            links: IndexMap::new(),
            embed: embed(
                EmbedKind::PowerBi,
                "Paste your Publish-to-web embed URL in Admin > Projects",
            ),
        },
        Project {
            id: "tab-sector".to_string(),
            title: "S&P 500 Sector Performance Tracker".to_string(),
            category: "Tableau".to_string(),
            year: "2025".to_string(),
            summary: "Interactive Tableau dashboard tracking sector rotation, relative performance, and correlation across market cycles.".to_string(),
            tags: strings(&["Market Analysis", "Sector Rotation", "Visualization"]),
            tools: strings(&["Tableau", "Python"]),
            metrics: strings(&["11 sectors", "5-year analysis", "Correlation matrix"]),
            featured: true,
            is_gen_ai: None,
            case_study: CaseStudy {
                problem: "Investors need visual tools to understand sector rotation and make allocation decisions.".to_string(),
                approach: "Multi-layer interactive visualizations with drill-down capabilities.".to_string(),
                data: "S&P 500 data, daily prices via Yahoo Finance API, sector classifications.".to_string(),
                methods: "Rolling returns, Sharpe ratios, cross-sector correlations, parameter controls.".to_string(),
                results: "Comprehensive sector analysis tool for identifying rotation trends.".to_string(),
                learnings: "Advanced Tableau: parameter actions, LOD expressions, dashboard design.".to_string(),
            },
            links: IndexMap::new(),
            embed: embed(
                EmbedKind::Tableau,
                "Paste your Tableau Public embed URL in Admin > Projects",
            ),
        },
        Project {
            id: "tab-risk".to_string(),
            title: "Portfolio Risk & Return Analyzer".to_string(),
            category: "Tableau".to_string(),
            year: "2025".to_string(),
            summary: "Risk-return visualization with efficient frontier, VaR, and Monte Carlo simulation results.".to_string(),
            tags: strings(&["Portfolio Theory", "Risk Management", "Monte Carlo"]),
            tools: strings(&["Tableau", "Python", "NumPy"]),
            metrics: strings(&["Efficient frontier", "VaR 95%/99%", "10K simulations"]),
            featured: false,
            is_gen_ai: None,
            case_study: CaseStudy {
                problem: "Portfolio managers need intuitive visualization of risk-return tradeoffs.".to_string(),
                approach: "Combined Python quantitative analysis with Tableau visualization.".to_string(),
                data: "Historical returns for 50+ assets, correlation matrices, simulated outcomes.".to_string(),
                methods: "Mean-Variance Optimization, Monte Carlo, VaR (parametric & historical), CVaR.".to_string(),
                results: "Interactive tool for exploring allocation impacts on risk-return profiles.".to_string(),
                learnings: "Integrating quant finance theory with practical visualization.".to_string(),
            },
            links: IndexMap::new(),
            embed: embed(EmbedKind::Tableau, "Paste Tableau Public embed URL in Admin"),
        },
        Project {
            id: "cfa-ch".to_string(),
            title: "CFA Research Challenge - Amazon Analysis".to_string(),
            category: "Python".to_string(),
            year: "2024".to_string(),
            summary: "Equity research on Amazon using Python + Bloomberg/Capital IQ. DCF, comps, real options with ESG integration.".to_string(),
            tags: strings(&["Equity Research", "DCF", "ESG", "Real Options"]),
            tools: strings(&["Python", "Bloomberg", "Capital IQ"]),
            metrics: strings(&["3 valuation methods", "5-year FCF forecast", "Full ESG/SWOT/Porter"]),
            featured: true,
            is_gen_ai: None,
            case_study: CaseStudy {
                problem: "Institutional-quality equity research and valuation of Amazon for CFA Research Challenge.".to_string(),
                approach: "Multi-methodology valuation: DCF, trading comps, real options + qualitative analysis.".to_string(),
                data: "Bloomberg financials, Capital IQ comps, SEC filings, industry reports, ESG ratings.".to_string(),
                methods: "3-stage DCF; EV/EBITDA & P/E comps; Black-Scholes real options; DuPont; Porter's.".to_string(),
                results: "Comprehensive equity research report with clear buy/sell recommendation.".to_string(),
                learnings: "Institutional research workflows, multi-source analysis, professional presentation.".to_string(),
            },
            links: IndexMap::new(),
            embed: None,
        },
        Project {
            id: "genai".to_string(),
            title: "Generative AI in Finance - Copilot Prototype".to_string(),
            category: "GenAI Finance".to_string(),
            year: "2025".to_string(),
            summary: "Architecture, safety guardrails, and applications of generative AI in financial analysis workflows.".to_string(),
            tags: strings(&["GenAI", "LLM", "RAG", "Safety"]),
            tools: strings(&["Python", "LangChain", "OpenAI API"]),
            metrics: strings(&["RAG pipeline", "Safety framework", "Interactive demo"]),
            featured: true,
            is_gen_ai: Some(true),
            case_study: CaseStudy {
                problem: "Analysts spend time on repetitive tasks; deploying LLMs in finance needs accuracy and compliance.".to_string(),
                approach: "RAG architecture for financial docs with multi-layer safety guardrails and human-in-the-loop.".to_string(),
                data: "10-K/10-Q filings, earnings transcripts, market data, regulatory filings.".to_string(),
                methods: "RAG with domain embeddings; prompt engineering; output validation; confidence scoring; audit trails.".to_string(),
                results: "Working prototype analyzing earnings, extracting metrics, generating summaries with citations.".to_string(),
                learnings: "AI in finance must prioritize accuracy. Guardrails and human oversight are non-negotiable.".to_string(),
            },
            links: IndexMap::new(),
            embed: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{is_structurally_valid, parse_document, to_pretty_json};

    #[test]
    fn test_default_content_is_valid() {
        let content = default_content();
        let value = serde_json::to_value(&content).unwrap();
        assert!(is_structurally_valid(&value));
    }

    #[test]
    fn test_default_content_shape() {
        let content = default_content();
        assert_eq!(content.hero.stats.len(), 4);
        assert_eq!(content.about.education.len(), 2);
        assert_eq!(content.about.experience.len(), 3);
        assert_eq!(content.about.skills.len(), 9);
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.blog.len(), 1);
        assert_eq!(content.testimonials.len(), 2);
        assert_eq!(
            content.projects.iter().filter(|p| p.embed.is_some()).count(),
            3
        );
    }

    #[test]
    fn test_default_content_survives_json() {
        let content = default_content();
        let json = to_pretty_json(&content).unwrap();
        assert_eq!(parse_document(&json).unwrap(), content);
    }
}
