//! # 内容目录
//!
//! 站点全部文案的唯一来源。六个页面各自一个聚合结构，
//! [`Catalog::builtin`] 返回编译进二进制的静态实例。
//!
//! 文案是最终展示文本，渲染层逐字呈现；改文案只改这一个文件。

use serde::Serialize;

use crate::content::{
    ContactLink, EngagementPath, EventEntry, FeaturedEvent, Gradient, Icon, InfoCard, Level,
    PageHero, Program, ResourceEntry, SectionHeading, Tone,
};
use crate::error::{SiteError, SiteResult};
use crate::page::PageId;

/// 行动号召横幅（首页底部）
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CtaBand {
    pub title: &'static str,
    pub lede: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// 首页内容
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HomeContent {
    pub hero_title: &'static str,
    pub hero_tagline: &'static str,
    pub hero_lede: &'static str,
    pub hero_primary: &'static str,
    pub hero_secondary: &'static str,
    pub why_heading: SectionHeading,
    pub highlights: &'static [InfoCard],
    pub paths_heading: SectionHeading,
    pub paths: &'static [EngagementPath],
    pub path_link: &'static str,
    pub events_heading: SectionHeading,
    pub featured: &'static [FeaturedEvent],
    pub featured_link: &'static str,
    pub cta: CtaBand,
}

/// 关于页内容
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AboutContent {
    pub hero: PageHero,
    pub mission_title: &'static str,
    pub mission: &'static [&'static str],
    pub values_title: &'static str,
    pub values: &'static [InfoCard],
}

/// 项目页内容
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgramsContent {
    pub hero: PageHero,
    pub programs: &'static [Program],
    pub card_link: &'static str,
}

/// 活动页内容
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventsContent {
    pub hero: PageHero,
    pub events: &'static [EventEntry],
    pub card_link: &'static str,
}

/// 资源页内容
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourcesContent {
    pub hero: PageHero,
    pub resources: &'static [ResourceEntry],
    pub card_link: &'static str,
}

/// 加入页内容
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JoinContent {
    pub hero: PageHero,
    pub form_title: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub interests_label: &'static str,
    pub interests: &'static [&'static str],
    pub background_label: &'static str,
    pub background_placeholder: &'static str,
    pub background_options: &'static [&'static str],
    pub submit_label: &'static str,
    pub success_message: &'static str,
    pub connect_title: &'static str,
    pub contacts: &'static [ContactLink],
}

/// 页脚内容
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FooterContent {
    pub blurb: &'static str,
    pub quick_title: &'static str,
    pub quick_links: &'static [PageId],
    pub connect_title: &'static str,
    pub connect: &'static [&'static str],
    pub partners_title: &'static str,
    pub partners: &'static [&'static str],
    pub copyright: &'static str,
}

/// 全站内容目录
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Catalog {
    pub brand_short: &'static str,
    pub brand_full: &'static str,
    pub home: HomeContent,
    pub about: AboutContent,
    pub programs: ProgramsContent,
    pub events: EventsContent,
    pub resources: ResourcesContent,
    pub join: JoinContent,
    pub footer: FooterContent,
}

impl Catalog {
    /// 内置目录
    pub fn builtin() -> &'static Catalog {
        &CATALOG
    }

    /// 序列化为 JSON 字符串（内容导出）
    pub fn to_json(&self) -> SiteResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SiteError::ExportFailed(e.to_string()))
    }
}

const CATALOG: Catalog = Catalog {
    brand_short: "NAISI",
    brand_full: "Nottingham AI Safety Initiative",

    home: HomeContent {
        hero_title: "Nottingham AI Safety Initiative",
        hero_tagline: "Building a Responsible AI Future Together",
        hero_lede: "Join our inclusive community working to ensure AI benefits everyone. \
                    No computer science background required - all perspectives are valuable.",
        hero_primary: "Join Our Community",
        hero_secondary: "Learn More",
        why_heading: SectionHeading {
            title: "Why AI Safety Matters",
            subtitle: "As AI systems become more powerful, ensuring they remain beneficial \
                       becomes critical for everyone",
        },
        highlights: &[
            InfoCard {
                icon: Icon::Shield,
                title: "Protecting Society",
                description: "Ensuring AI systems are safe, reliable, and aligned with human values",
            },
            InfoCard {
                icon: Icon::Users,
                title: "Inclusive Development",
                description: "Bringing diverse perspectives to shape how AI impacts our world",
            },
            InfoCard {
                icon: Icon::Brain,
                title: "Future Thinking",
                description: "Addressing challenges before they arise through proactive research",
            },
        ],
        paths_heading: SectionHeading {
            title: "Find Your Path",
            subtitle: "Choose how you want to engage based on your interests and available time",
        },
        paths: &[
            EngagementPath {
                icon: Icon::Mail,
                title: "Stay Informed",
                time: "5 min/month",
                gradient: Gradient::new(Tone::Purple, Tone::Pink),
            },
            EngagementPath {
                icon: Icon::Calendar,
                title: "Attend Events",
                time: "2 hrs/month",
                gradient: Gradient::new(Tone::Blue, Tone::Cyan),
            },
            EngagementPath {
                icon: Icon::BookOpen,
                title: "Join Study Groups",
                time: "2 hrs/week",
                gradient: Gradient::new(Tone::Green, Tone::Teal),
            },
            EngagementPath {
                icon: Icon::Brain,
                title: "Fellowship Program",
                time: "5 hrs/week",
                gradient: Gradient::new(Tone::Orange, Tone::Red),
            },
        ],
        path_link: "Learn more",
        events_heading: SectionHeading {
            title: "Upcoming Events",
            subtitle: "All events are beginner-friendly with refreshments provided",
        },
        featured: &[
            FeaturedEvent {
                title: "Weekly Discussion Group",
                date: "Every Tuesday",
                time: "6:00 PM",
                location: "Portland Building",
            },
            FeaturedEvent {
                title: "AI Ethics Workshop",
                date: "First Monday",
                time: "5:30 PM",
                location: "Jubilee Campus",
            },
            FeaturedEvent {
                title: "Policy Forum",
                date: "Third Thursday",
                time: "7:00 PM",
                location: "Law Building",
            },
        ],
        featured_link: "View Details",
        cta: CtaBand {
            title: "Ready to Make a Difference?",
            lede: "Join our community and help shape the future of AI safety. \
                   No experience required!",
            primary: "Get Started",
            secondary: "Contact Us",
        },
    },

    about: AboutContent {
        hero: PageHero {
            title: "About NAISI",
            lede: "The Nottingham AI Safety Initiative brings together students and researchers \
                   from all disciplines to work on one of the most important challenges of our time.",
            gradient: Gradient::new(Tone::Blue, Tone::Cyan),
        },
        mission_title: "Our Mission",
        mission: &[
            "We believe that ensuring AI systems remain beneficial and aligned with human \
             values is not just a technical challenge, but a societal one that requires \
             diverse perspectives and backgrounds.",
            "Our mission is to create an inclusive community where students from computer \
             science, philosophy, politics, law, arts, and all other disciplines can \
             contribute to AI safety research and policy.",
            "We provide education, research opportunities, and pathways to careers in AI \
             safety, making this critical field accessible to everyone regardless of their \
             technical background.",
        ],
        values_title: "Our Values",
        values: &[
            InfoCard {
                icon: Icon::Users,
                title: "Inclusivity",
                description: "We welcome and value perspectives from all backgrounds and disciplines.",
            },
            InfoCard {
                icon: Icon::Brain,
                title: "Collaboration",
                description: "We believe the best solutions come from working together across boundaries.",
            },
            InfoCard {
                icon: Icon::Shield,
                title: "Impact",
                description: "We focus on research and action that makes a real difference in AI safety.",
            },
        ],
    },

    programs: ProgramsContent {
        hero: PageHero {
            title: "Our Programs",
            lede: "From casual participation to intensive research, find the right level of \
                   engagement for you.",
            gradient: Gradient::new(Tone::Purple, Tone::Pink),
        },
        programs: &[
            Program {
                title: "Introduction Workshop Series",
                duration: "4 weeks",
                commitment: "2 hours/week",
                description: "Perfect for beginners. Learn the fundamentals of AI safety \
                              through interactive workshops.",
                topics: &["AI Basics", "Safety Challenges", "Ethics & Policy", "Career Paths"],
                gradient: Gradient::new(Tone::Green, Tone::Teal),
            },
            Program {
                title: "Technical Fellowship",
                duration: "8 weeks",
                commitment: "5 hours/week",
                description: "Dive deep into technical AI safety research with mentorship \
                              and hands-on projects.",
                topics: &[
                    "Machine Learning",
                    "Alignment Theory",
                    "Research Methods",
                    "Paper Implementation",
                ],
                gradient: Gradient::new(Tone::Blue, Tone::Cyan),
            },
            Program {
                title: "Policy Fellowship",
                duration: "8 weeks",
                commitment: "5 hours/week",
                description: "Explore AI governance, policy, and regulation. No technical \
                              background required.",
                topics: &[
                    "AI Governance",
                    "Policy Analysis",
                    "International Cooperation",
                    "Risk Assessment",
                ],
                gradient: Gradient::new(Tone::Purple, Tone::Pink),
            },
            Program {
                title: "Research Apprenticeship",
                duration: "3-6 months",
                commitment: "10+ hours/week",
                description: "Work on cutting-edge AI safety research with faculty and PhD \
                              students.",
                topics: &[
                    "Original Research",
                    "Paper Writing",
                    "Conference Presentations",
                    "Publication",
                ],
                gradient: Gradient::new(Tone::Orange, Tone::Red),
            },
        ],
        card_link: "Learn More",
    },

    events: EventsContent {
        hero: PageHero {
            title: "Events",
            lede: "Join our regular events to learn, discuss, and connect with the AI safety \
                   community.",
            gradient: Gradient::new(Tone::Green, Tone::Blue),
        },
        events: &[
            EventEntry {
                title: "Weekly Discussion Group",
                kind: "Regular Meeting",
                date: "Every Tuesday",
                time: "6:00 PM - 8:00 PM",
                location: "Portland Building, Room 201",
                description: "Casual discussions about current AI safety topics. This week: \
                              'AI in Healthcare'",
            },
            EventEntry {
                title: "Guest Speaker: Dr. Sarah Chen",
                kind: "Special Event",
                date: "November 15, 2024",
                time: "5:00 PM - 6:30 PM",
                location: "Engineering Building, Lecture Hall A",
                description: "Leading AI safety researcher discusses latest developments in \
                              alignment research",
            },
            EventEntry {
                title: "Beginner's Workshop",
                kind: "Workshop",
                date: "First Monday of each month",
                time: "5:30 PM - 7:30 PM",
                location: "Jubilee Campus, Lab 3",
                description: "Introduction to AI safety concepts for newcomers. No background \
                              required!",
            },
            EventEntry {
                title: "AI Safety Film Night",
                kind: "Social Event",
                date: "November 22, 2024",
                time: "7:00 PM - 10:00 PM",
                location: "Student Union Cinema",
                description: "Watch and discuss films exploring AI themes. Popcorn provided!",
            },
        ],
        card_link: "Add to Calendar",
    },

    resources: ResourcesContent {
        hero: PageHero {
            title: "Resources",
            lede: "Curated materials to help you learn about AI safety at your own pace.",
            gradient: Gradient::new(Tone::Orange, Tone::Yellow),
        },
        resources: &[
            ResourceEntry {
                title: "AI Safety Fundamentals",
                kind: "Course",
                icon: Icon::BookOpen,
                level: Level::Beginner,
            },
            ResourceEntry {
                title: "Technical Papers Collection",
                kind: "Research",
                icon: Icon::Brain,
                level: Level::Advanced,
            },
            ResourceEntry {
                title: "Policy & Governance Guide",
                kind: "Guide",
                icon: Icon::Shield,
                level: Level::Intermediate,
            },
            ResourceEntry {
                title: "Career Pathways in AI Safety",
                kind: "Career",
                icon: Icon::Users,
                level: Level::AllLevels,
            },
            ResourceEntry {
                title: "Weekly Newsletter Archive",
                kind: "Newsletter",
                icon: Icon::Mail,
                level: Level::AllLevels,
            },
            ResourceEntry {
                title: "Recommended Podcasts",
                kind: "Media",
                icon: Icon::Calendar,
                level: Level::Beginner,
            },
        ],
        card_link: "Access Resource",
    },

    join: JoinContent {
        hero: PageHero {
            title: "Join NAISI",
            lede: "Take the first step in your AI safety journey. We're excited to welcome \
                   you to our community!",
            gradient: Gradient::new(Tone::Blue, Tone::Cyan),
        },
        form_title: "Get Started",
        email_label: "Email Address",
        email_placeholder: "your.email@nottingham.ac.uk",
        interests_label: "I'm interested in... (select all that apply)",
        interests: &[
            "Technical Research",
            "Policy & Governance",
            "Events & Workshops",
            "Reading Groups",
            "Career Development",
        ],
        background_label: "Background (optional)",
        background_placeholder: "Select your field of study",
        background_options: &[
            "Computer Science",
            "Philosophy",
            "Politics/International Relations",
            "Law",
            "Engineering",
            "Natural Sciences",
            "Social Sciences",
            "Arts & Humanities",
            "Other",
        ],
        submit_label: "Join Our Community",
        success_message: "Thank you for joining! Check your email for next steps.",
        connect_title: "Other Ways to Connect",
        contacts: &[
            ContactLink {
                icon: Icon::Mail,
                label: "ai-safety@nottingham.ac.uk",
            },
            ContactLink {
                icon: Icon::Github,
                label: "GitHub: nottingham-ai-safety",
            },
            ContactLink {
                icon: Icon::Linkedin,
                label: "LinkedIn: NAISI",
            },
        ],
    },

    footer: FooterContent {
        blurb: "Building a responsible AI future through inclusive collaboration.",
        quick_title: "Quick Links",
        quick_links: &[
            PageId::About,
            PageId::Programs,
            PageId::Events,
            PageId::Resources,
        ],
        connect_title: "Connect",
        connect: &["Discord", "LinkedIn", "Twitter", "GitHub"],
        partners_title: "Partners",
        partners: &[
            "University of Nottingham",
            "UK AI Safety Network",
            "Student Union",
        ],
        copyright: "(c) 2024 Nottingham AI Safety Initiative. All rights reserved.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.home.highlights.len(), 3);
        assert_eq!(catalog.home.paths.len(), 4);
        assert_eq!(catalog.home.featured.len(), 3);
        assert_eq!(catalog.about.mission.len(), 3);
        assert_eq!(catalog.about.values.len(), 3);
        assert_eq!(catalog.programs.programs.len(), 4);
        assert_eq!(catalog.events.events.len(), 4);
        assert_eq!(catalog.resources.resources.len(), 6);
        assert_eq!(catalog.join.interests.len(), 5);
        assert_eq!(catalog.join.background_options.len(), 9);
        assert_eq!(catalog.footer.quick_links.len(), 4);
    }

    #[test]
    fn test_interests_unique() {
        // 兴趣标签进 BTreeSet，重复会让勾选互相干扰
        let catalog = Catalog::builtin();
        let unique: HashSet<_> = catalog.join.interests.iter().collect();
        assert_eq!(unique.len(), catalog.join.interests.len());
    }

    #[test]
    fn test_every_program_has_topics() {
        for program in Catalog::builtin().programs.programs {
            assert!(!program.topics.is_empty(), "{} 缺少主题", program.title);
            assert_eq!(program.topics.len(), 4);
        }
    }

    #[test]
    fn test_quick_links_skip_home_and_join() {
        let catalog = Catalog::builtin();
        assert!(!catalog.footer.quick_links.contains(&PageId::Home));
        assert!(!catalog.footer.quick_links.contains(&PageId::Join));
    }

    #[test]
    fn test_catalog_serializes() {
        let json = Catalog::builtin().to_json().unwrap();
        assert!(json.contains("Nottingham AI Safety Initiative"));
        assert!(json.contains("Technical Research"));
    }
}
