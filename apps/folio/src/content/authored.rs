use crate::content::ContentStore;
use crate::models::content::{ExperienceEntry, SkillTag};

/// The hand-authored resume content, used when no content file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthoredContent;

impl ContentStore for AuthoredContent {
    fn experiences(&self) -> Vec<ExperienceEntry> {
        vec![
            ExperienceEntry {
                title: "Fullstack - Hiresweet".to_string(),
                location: "Région de Paris, France".to_string(),
                company_link: "https://hiresweet.com/".to_string(),
                icon: "hiresweetImage".to_string(),
                excerpt: "Développement de l'application client d'hiresweet et des outils internes \
                          utilisant React en front, NodeJs et MongoDB en back ainsi que des API \
                          REST et GraphQL."
                    .to_string(),
                skills: vec![
                    SkillTag::new("MongoDB", "#13aa52", "white"),
                    SkillTag::new("Node.js", "#026e00", "white"),
                    SkillTag::new("GraphQL", "#E10098", "black"),
                    SkillTag::new("React", "#61dafb", "black"),
                    SkillTag::new("AWS", "#f8991d", "black"),
                    SkillTag::new("Terraform", "#623ce4", "white"),
                    SkillTag::new("CircleCI", "#161616", "white"),
                    SkillTag::new("Docker", "#0091e2", "white"),
                ],
            },
            ExperienceEntry {
                title: "Fullstack - Ayuda (stage)".to_string(),
                location: "Sydney, New South Wales, Australia".to_string(),
                company_link: "https://broadsign.com/ayuda/".to_string(),
                icon: "ayudaImage".to_string(),
                excerpt: "Développement d'un logiciel de gestion des affichages publicitaires \
                          utilisant C# et jQuery. Personnalisation de contrats et factures."
                    .to_string(),
                skills: vec![
                    SkillTag::new("SQL", "#006cc1", "white"),
                    SkillTag::new("C#", "#38225d", "white"),
                    SkillTag::new("JQuery", "#b3d4fc", "black"),
                ],
            },
            ExperienceEntry {
                title: "Fullstack - Homerez (stage)".to_string(),
                location: "Région de Paris, France".to_string(),
                company_link: "https://www.homerez.fr/".to_string(),
                icon: "homerezImage".to_string(),
                excerpt: "Développement des différentes applications web d'Homerez (CRM, \
                          plateforme de réservation) basées sur des technologies Javascript \
                          (NodeJS, AngularJS) et MongoDB."
                    .to_string(),
                skills: vec![
                    SkillTag::new("MongoDB", "#13aa52", "white"),
                    SkillTag::new("Node.js", "#026e00", "white"),
                    SkillTag::new("AngularJS", "#de0032", "white"),
                ],
            },
        ]
    }

    fn education(&self) -> Vec<ExperienceEntry> {
        vec![ExperienceEntry {
            title: "École Centrale de Lyon".to_string(),
            location: "Région de Lyon, France".to_string(),
            company_link: "https://www.ec-lyon.fr/".to_string(),
            icon: "eclImage".to_string(),
            excerpt: "Formation d'ingénieur généraliste, option informatique.".to_string(),
            skills: vec![
                SkillTag::new("Python", "#ffd343", "black"),
                SkillTag::new("Javascript", "#f7df1e", "black"),
                SkillTag::new("SQL", "#006cc1", "white"),
            ],
        }]
    }
}
