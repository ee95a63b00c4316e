// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in category table and its locale overlays.
//!
//! ## Adding a category
//!
//! 1. Append a `CategoryDef` to `CATEGORIES` (English text, order matters)
//! 2. Add an `OverlayDef` per translated locale to `OVERLAYS`
//!
//! Locales without an overlay show the English text.

pub(super) struct SubcategoryDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub(super) struct CategoryDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub seo_description: Option<&'static str>,
    pub keywords: &'static [&'static str],
    pub subcategories: &'static [SubcategoryDef],
}

pub(super) struct OverlayDef {
    pub locale: &'static str,
    pub category: &'static str,
    pub name: Option<&'static str>,
    pub description: Option<&'static str>,
    pub seo_description: Option<&'static str>,
    /// `(subcategory id, name, description)`
    pub subcategories: &'static [(&'static str, Option<&'static str>, Option<&'static str>)],
}

pub(super) const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        id: "cloud",
        name: "Cloud Computing",
        description: "Learn about Microsoft Azure, AWS, and cloud infrastructure management.",
        icon: "☁️",
        seo_description: Some("Explore cloud computing tutorials, guides, and best practices for Microsoft Azure, AWS, and cloud infrastructure management."),
        keywords: &["cloud computing", "azure", "aws", "cloud infrastructure", "devops", "cloud services"],
        subcategories: &[
            SubcategoryDef { id: "azure", name: "Microsoft Azure", description: "Azure services and infrastructure" },
            SubcategoryDef { id: "aws", name: "Amazon Web Services", description: "AWS cloud platform and services" },
        ],
    },
    CategoryDef {
        id: "cybersecurity",
        name: "Cybersecurity",
        description: "Security best practices, threat analysis, and secure development.",
        icon: "🔒",
        seo_description: Some("Learn cybersecurity fundamentals, threat analysis, penetration testing, and secure development practices."),
        keywords: &["cybersecurity", "security", "penetration testing", "ethical hacking", "threat analysis", "secure development"],
        subcategories: &[
            SubcategoryDef { id: "defensive", name: "Defensive Security", description: "Protecting systems and networks" },
            SubcategoryDef { id: "offensive", name: "Offensive Security", description: "Ethical hacking and penetration testing" },
        ],
    },
    CategoryDef {
        id: "networking",
        name: "Networking",
        description: "Network architecture, protocols, and cloud networking solutions.",
        icon: "🌐",
        seo_description: Some("Master networking fundamentals, protocols, network architecture, and cloud networking solutions."),
        keywords: &["networking", "network protocols", "network architecture", "tcp/ip", "routing", "switching"],
        subcategories: &[
            SubcategoryDef { id: "fundamentals", name: "Fundamentals", description: "Basic networking concepts" },
            SubcategoryDef { id: "intermediate", name: "Intermediate", description: "Advanced networking topics" },
        ],
    },
    CategoryDef {
        id: "dev",
        name: "Development",
        description: "Programming tutorials, development best practices, and code reviews.",
        icon: "💻",
        seo_description: Some("Learn programming with tutorials on Python, C/C++, web development, and software development best practices."),
        keywords: &["programming", "development", "python", "c++", "web development", "coding", "software engineering"],
        subcategories: &[
            SubcategoryDef { id: "python", name: "Python", description: "Python programming and frameworks" },
            SubcategoryDef { id: "c", name: "C/C++", description: "Systems programming with C/C++" },
            SubcategoryDef { id: "web", name: "Web Development", description: "Frontend and backend web development" },
        ],
    },
];

pub(super) const OVERLAYS: &[OverlayDef] = &[
    OverlayDef {
        locale: "es",
        category: "cloud",
        name: Some("Computación en la Nube"),
        description: Some("Aprende sobre Microsoft Azure, AWS y la gestión de infraestructura en la nube."),
        seo_description: Some("Tutoriales, guías y buenas prácticas de computación en la nube para Microsoft Azure, AWS y gestión de infraestructura."),
        subcategories: &[
            ("azure", None, Some("Servicios e infraestructura de Azure")),
            ("aws", None, Some("Plataforma y servicios en la nube de AWS")),
        ],
    },
    OverlayDef {
        locale: "es",
        category: "cybersecurity",
        name: Some("Ciberseguridad"),
        description: Some("Buenas prácticas de seguridad, análisis de amenazas y desarrollo seguro."),
        seo_description: Some("Aprende fundamentos de ciberseguridad, análisis de amenazas, pruebas de penetración y desarrollo seguro."),
        subcategories: &[
            ("defensive", Some("Seguridad Defensiva"), Some("Protección de sistemas y redes")),
            ("offensive", Some("Seguridad Ofensiva"), Some("Hacking ético y pruebas de penetración")),
        ],
    },
    OverlayDef {
        locale: "es",
        category: "networking",
        name: Some("Redes"),
        description: Some("Arquitectura de redes, protocolos y soluciones de redes en la nube."),
        seo_description: None,
        subcategories: &[
            ("fundamentals", Some("Fundamentos"), Some("Conceptos básicos de redes")),
            ("intermediate", Some("Intermedio"), Some("Temas avanzados de redes")),
        ],
    },
    OverlayDef {
        locale: "es",
        category: "dev",
        name: Some("Desarrollo"),
        description: Some("Tutoriales de programación, buenas prácticas de desarrollo y revisiones de código."),
        seo_description: None,
        subcategories: &[
            ("python", None, Some("Programación y frameworks de Python")),
            ("c", None, Some("Programación de sistemas con C/C++")),
            ("web", Some("Desarrollo Web"), Some("Desarrollo web frontend y backend")),
        ],
    },
];
