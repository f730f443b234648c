//! Everything the page says, kept apart from how it is laid out.

pub struct HeadMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
}

pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavSection {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl ExternalLink {
    /// Links leaving the site open in a new tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub period: &'static str,
}

pub const NAME: &str = "Tanmay Paul";
pub const TAGLINE: &str = "Software Developer | React | Node | JavaScript";
pub const EMAIL: &str = "tanmaypaulofficial@gmail.com";

pub const FAVICON: &str = "/favicon.svg";
pub const PROFILE_IMAGE: &str = "/profile.svg";

pub const HEAD: HeadMeta = HeadMeta {
    title: "Tanmay Paul | Software Developer Portfolio",
    description: "Portfolio of Tanmay Paul, a skilled software developer specializing in React, Node.js, MongoDB, and more.",
    keywords: &[
        "Tanmay Paul",
        "Software Developer",
        "React Developer",
        "Node.js Developer",
        "Portfolio",
        "Full Stack Developer",
    ],
    author: NAME,
};

pub const SECTIONS: &[NavSection] = &[
    NavSection {
        id: "about",
        label: "About",
    },
    NavSection {
        id: "skills",
        label: "Skills",
    },
    NavSection {
        id: "projects",
        label: "Projects",
    },
    NavSection {
        id: "contact",
        label: "Contact",
    },
];

pub const GITHUB: ExternalLink = ExternalLink {
    label: "GitHub",
    href: "https://github.com/tanmayofficial",
};

pub const LINKEDIN: ExternalLink = ExternalLink {
    label: "LinkedIn",
    href: "https://www.linkedin.com/in/tanmaypaul95/",
};

pub const HERO_LINKS: &[ExternalLink] = &[GITHUB, LINKEDIN];

pub const ABOUT: &str = "With over 5 years of total and over 2 years of experience as a Software Developer, I have a strong background in website and software development. I'm proficient in HTML, CSS, JavaScript, React.js, Node.js, and familiar with Figma, Adobe Premiere Pro, Adobe Photoshop, etc. I am passionate about building impactful digital experiences and continuously learning new technologies.";

pub const SKILLS: &[&str] = &[
    "HTML",
    "CSS",
    "JavaScript",
    "React.js",
    "Node.js",
    "Express.js",
    "MongoDB",
    "MySQL",
    "Tailwind CSS",
    "Bootstrap",
    "Git",
    "GitHub/GitLab",
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Bulkmatic Solutions",
        summary: "Spearheaded the development of a dynamic Planning Board & Admin Dashboard for order and tankwash management. Used React.js, Node.js, PostgreSQL, Kendo UI, Material UI, and more.",
        period: "Jan 2023 - Oct 2023",
    },
    Project {
        title: "Wine App",
        summary: "Developed a robust Admin Dashboard for liquor/wine management system. Managed functionalities for admins, distributors, and suppliers using React.js, MongoDB, AWS, Material UI, and Express.js.",
        period: "Sept 2022 - Oct 2023",
    },
    Project {
        title: "ClearedTalent",
        summary: "Contributed to a robust Admin Dashboard for a Recruitment Organization at ClearedTalent. Managed functionalities for customers, agencies, clients, and public-specific test cases, ensuring an efficient user experience. Utilized a tech stack including React.js, Mongoose, Azure Functions, MySQL, Sequelize, Kendo UI, and more.",
        period: "Sept 2022 - Oct 2023",
    },
    Project {
        title: "Pathology Lab",
        summary: "Worked on the frontend development of a Pathology Lab application. Built dynamic user interfaces using React.js, React-Router-DOM, Context API, CSS3, Tailwind CSS, Material UI, and other frontend libraries. Focused on creating a clean, responsive, and user-friendly experience for lab management and patient reports.",
        period: "Dec 2024 - Mar 2025",
    },
];

pub const CONTACT_BLURB: &str =
    "Feel free to reach out if you want to collaborate or have any questions!";

pub const CONTACT_LINKS: &[ExternalLink] = &[
    ExternalLink {
        label: "Email Me",
        href: "mailto:tanmaypaulofficial@gmail.com",
    },
    LINKEDIN,
    GITHUB,
];

pub fn keywords() -> String {
    HEAD.keywords.join(", ")
}

/// Copyright year, taken from the build timestamp.
pub fn copyright_year() -> i32 {
    use chrono::{DateTime, Datelike};

    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.year())
        .unwrap_or(2025)
}
