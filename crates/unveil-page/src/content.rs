//! Static landing page content.
//!
//! Pure presentation data: feature cards, pricing tiers, code samples and
//! link columns. Nothing in here has behavior; the reveal wiring lives in
//! `sections` and only cares about how many items each section renders.

use serde::Serialize;

/// A feature card in the features grid.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// Icon name as rendered by the host.
    pub icon: &'static str,
    /// Accent gradient as rendered by the host.
    pub gradient: &'static str,
}

/// A pricing tier card.
#[derive(Debug, Clone, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

/// A copyable code sample.
#[derive(Debug, Clone, Serialize)]
pub struct CodeExample {
    pub title: &'static str,
    pub description: &'static str,
    pub language: &'static str,
    pub code: &'static str,
}

/// A navigation link.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Serialize)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

/// The one-line install command shown above the code samples.
pub const INSTALL_COMMAND: &str = "npm install @llms247/sdk";

/// Brand name shown in the header and footer.
pub const BRAND: &str = "LLMs247";

/// Brand blurb shown under the footer logo.
pub const BRAND_BLURB: &str = "The unified AI API gateway that simplifies how developers \
integrate and scale with multiple AI model providers. One key, infinite possibilities.";

/// Hero headline and supporting line.
pub const HERO_HEADLINE: &str = "One API for every AI model";
pub const HERO_SUBHEAD: &str = "Built for developers who demand reliability, performance, \
and simplicity in their AI integrations.";

/// Header navigation links.
pub fn header_links() -> &'static [NavLink] {
    &[
        NavLink {
            label: "Features",
            href: "#features",
        },
        NavLink {
            label: "Code",
            href: "#code",
        },
        NavLink {
            label: "Pricing",
            href: "#pricing",
        },
        NavLink {
            label: "Documentation",
            href: "https://docs.llms247.com",
        },
    ]
}

/// The six feature cards.
pub fn features() -> &'static [Feature] {
    &[
        Feature {
            title: "Key Rotation Engine",
            description: "Automatically rotate API keys across providers to prevent rate \
limits and maintain continuous service.",
            icon: "refresh-cw",
            gradient: "from-blue-500 to-cyan-500",
        },
        Feature {
            title: "Provider Failover",
            description: "Seamlessly switch between AI providers when one goes down, \
ensuring zero downtime for your applications.",
            icon: "shield",
            gradient: "from-green-500 to-emerald-500",
        },
        Feature {
            title: "Smart Model Selection",
            description: "AI-powered routing that automatically selects the best model for \
your specific use case and cost requirements.",
            icon: "brain",
            gradient: "from-purple-500 to-pink-500",
        },
        Feature {
            title: "Free-tier Optimization",
            description: "Maximize your budget by intelligently routing requests to \
free-tier models when quality requirements are met.",
            icon: "zap",
            gradient: "from-yellow-500 to-orange-500",
        },
        Feature {
            title: "One Key, Multiple Providers",
            description: "Single API integration gives you access to 15+ AI providers \
including OpenAI, Anthropic, Google, and more.",
            icon: "key",
            gradient: "from-indigo-500 to-blue-500",
        },
        Feature {
            title: "Real-time Monitoring",
            description: "Track performance, costs, and usage across all providers with \
comprehensive analytics and alerts.",
            icon: "monitor",
            gradient: "from-red-500 to-pink-500",
        },
    ]
}

/// The three pricing tiers.
pub fn pricing_plans() -> &'static [PricingPlan] {
    &[
        PricingPlan {
            name: "Free",
            price: "$0",
            period: "forever",
            description: "Perfect for getting started and small projects",
            features: &[
                "10,000 requests per month",
                "Access to 5 AI providers",
                "Basic model selection",
                "Standard support",
                "Community Discord access",
            ],
            cta: "Get Started Free",
            popular: false,
        },
        PricingPlan {
            name: "Pro",
            price: "$29",
            period: "per month",
            description: "For growing applications and teams",
            features: &[
                "1M requests per month",
                "Access to all 15+ AI providers",
                "Smart routing & failover",
                "Advanced analytics",
                "Priority support",
                "Custom rate limits",
                "Webhook integrations",
            ],
            cta: "Start Pro Trial",
            popular: true,
        },
        PricingPlan {
            name: "Enterprise",
            price: "Custom",
            period: "contact us",
            description: "For high-volume and custom requirements",
            features: &[
                "Unlimited requests",
                "Dedicated infrastructure",
                "Custom model fine-tuning",
                "SLA guarantees",
                "Dedicated support team",
                "On-premise deployment",
                "Custom integrations",
            ],
            cta: "Contact Sales",
            popular: false,
        },
    ]
}

/// The three copyable code samples.
pub fn code_examples() -> &'static [CodeExample] {
    &[
        CodeExample {
            title: "Chat Completion",
            description: "Simple chat completion with automatic model selection",
            language: "typescript",
            code: r#"import { llms247 } from "@llms247/sdk"

const res = await llms247.chat({
  model: "best",
  prompt: "Explain quantum computing in simple words."
})
console.log(res.text)"#,
        },
        CodeExample {
            title: "Custom Routing",
            description: "Route to specific providers with custom parameters",
            language: "typescript",
            code: r#"import { llms247 } from "@llms247/sdk"

// Route to OpenAI GPT-4 for reasoning tasks
const reasoning = await llms247.chat({
  provider: "openai",
  model: "gpt-4",
  prompt: "Solve this complex algorithm problem...",
  temperature: 0.1
})

// Route to Claude for creative writing
const creative = await llms247.chat({
  provider: "anthropic",
  model: "claude-3-sonnet",
  prompt: "Write a short story about AI and humanity...",
  temperature: 0.9
})"#,
        },
        CodeExample {
            title: "Streaming Responses",
            description: "Real-time streaming with proper error handling",
            language: "typescript",
            code: r#"import { llms247 } from "@llms247/sdk"

try {
  const stream = await llms247.chat({
    model: "best",
    prompt: "Write a detailed technical explanation...",
    stream: true
  })

  for await (const chunk of stream) {
    process.stdout.write(chunk.text)
  }
} catch (error) {
  console.error('Streaming failed:', error)
  // Automatic failover to backup provider
}"#,
        },
    ]
}

/// The footer link columns (brand column excluded; it has no links list).
pub fn footer_columns() -> &'static [FooterColumn] {
    &[
        FooterColumn {
            title: "Product",
            links: &[
                NavLink {
                    label: "Features",
                    href: "#features",
                },
                NavLink {
                    label: "Pricing",
                    href: "#pricing",
                },
                NavLink {
                    label: "Documentation",
                    href: "https://docs.llms247.com",
                },
                NavLink {
                    label: "Status Page",
                    href: "https://status.llms247.com",
                },
                NavLink {
                    label: "Changelog",
                    href: "https://changelog.llms247.com",
                },
            ],
        },
        FooterColumn {
            title: "Company",
            links: &[
                NavLink {
                    label: "Blog",
                    href: "https://blog.llms247.com",
                },
                NavLink {
                    label: "Careers",
                    href: "https://llms247.com/careers",
                },
                NavLink {
                    label: "Contact",
                    href: "mailto:hello@llms247.com",
                },
                NavLink {
                    label: "About",
                    href: "https://llms247.com/about",
                },
                NavLink {
                    label: "Press Kit",
                    href: "https://llms247.com/press",
                },
            ],
        },
    ]
}
