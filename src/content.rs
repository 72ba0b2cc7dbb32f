//! Static portfolio content

use crate::state::Section;
use chrono::NaiveDate;

/// A calendar month, used for employment periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// "September 2023"
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| self.year.to_string())
    }

    fn months_until(&self, later: &YearMonth) -> i32 {
        (later.year - self.year) * 12 + later.month as i32 - self.month as i32
    }
}

/// Employment period; an open end means the position is current
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenure {
    pub start: YearMonth,
    pub end: Option<YearMonth>,
}

impl Tenure {
    /// "September 2023 - Present", or "September 2023 - September 2024 (1 Year)"
    pub fn label(&self) -> String {
        match &self.end {
            None => format!("{} - Present", self.start.label()),
            Some(end) => match self.duration_label() {
                Some(duration) => format!("{} - {} ({duration})", self.start.label(), end.label()),
                None => format!("{} - {}", self.start.label(), end.label()),
            },
        }
    }

    /// Length of a closed period, e.g. "1 Year 3 Months"
    pub fn duration_label(&self) -> Option<String> {
        let months = self.start.months_until(self.end.as_ref()?);
        if months <= 0 {
            return None;
        }
        let (years, months) = (months / 12, months % 12);
        let plural = |n: i32, unit: &str| {
            if n == 1 {
                format!("1 {unit}")
            } else {
                format!("{n} {unit}s")
            }
        };
        let parts: Vec<String> = [(years, "Year"), (months, "Month")]
            .into_iter()
            .filter(|(n, _)| *n > 0)
            .map(|(n, unit)| plural(n, unit))
            .collect();
        Some(parts.join(" "))
    }
}

/// Title plus one-line description
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// Kicker, heading and optional tagline above a section
#[derive(Debug, Clone, Copy)]
pub struct SectionHeading {
    pub kicker: &'static str,
    pub title: &'static str,
    pub tagline: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub tenure: Tenure,
    pub points: &'static [&'static str],
    pub tags: &'static [&'static str],
}

impl Job {
    pub fn is_current(&self) -> bool {
        self.tenure.end.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub phases: &'static [Card],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub title: &'static str,
    pub board: &'static str,
    pub school: &'static str,
    pub location: &'static str,
    pub years: &'static str,
    pub grade: Option<&'static str>,
    pub completed: bool,
}

/// Everything shown on the page
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub roles: &'static str,
    pub employer: &'static str,
    pub summary: &'static str,
    pub resume_url: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub contacts: &'static [ContactLink],
    pub about_title: &'static str,
    pub about: &'static [&'static str],
    pub highlights: &'static [Card],
    pub jobs: &'static [Job],
    pub achievements: &'static [Card],
    pub skills: &'static [SkillGroup],
    pub specialty: Card,
    pub project: Project,
    pub education: &'static [Education],
    pub professional_interests: &'static [Card],
    pub hobbies: &'static [Card],
    pub contact_blurb: &'static str,
    pub footer: &'static str,
}

impl Profile {
    /// Heading block for a section (the hero has none)
    pub fn heading(&self, section: Section) -> Option<SectionHeading> {
        let heading = |kicker, title, tagline| {
            Some(SectionHeading {
                kicker,
                title,
                tagline,
            })
        };
        match section {
            Section::Home => None,
            Section::About => heading("ABOUT ME", "Process Engineering Professional", None),
            Section::Experience => heading(
                "WORK EXPERIENCE",
                "Professional Journey",
                Some("Building expertise in petrochemical manufacturing and plant operations"),
            ),
            Section::Skills => heading(
                "MY SKILLS",
                "Technical Expertise",
                Some("Comprehensive skills in chemical engineering and plant operations"),
            ),
            Section::Projects => heading(
                "ACADEMIC PROJECT",
                "Featured Project",
                Some("Comprehensive chemical process design and analysis"),
            ),
            Section::Education => heading(
                "EDUCATION",
                "Academic Background",
                Some("Building expertise in chemical engineering"),
            ),
            Section::Interests => heading(
                "INTERESTS & HOBBIES",
                "Areas of Interest",
                Some("Professional interests and personal pursuits"),
            ),
            Section::Contact => heading(
                "GET IN TOUCH",
                "Let's Connect",
                Some("Interested in collaboration or have opportunities? Feel free to reach out!"),
            ),
        }
    }
}

pub const PROFILE: Profile = Profile {
    name: "Ayush Patel",
    headline: "CHEMICAL ENGINEER",
    roles: "Field Executive | Process Engineer",
    employer: "Reliance Industries Limited (RIL)",
    summary: "Chemical Engineering Diploma holder with hands-on experience in polypropylene \
              manufacturing, plant operations, and process safety at one of India's largest \
              petrochemical facilities.",
    resume_url: "/ayush_resume.pdf",
    email: "ayushpatel3018@gmail.com",
    location: "Surat, Gujarat, India",
    contacts: &[
        ContactLink {
            label: "Email",
            value: "ayushpatel3018@gmail.com",
            link: "mailto:ayushpatel3018@gmail.com",
        },
        ContactLink {
            label: "Phone",
            value: "+91 91065 68331",
            link: "tel:+919106568331",
        },
        ContactLink {
            label: "LinkedIn",
            value: "linkedin.com/in/ayush-patel",
            link: "https://www.linkedin.com/in/ayush-patel-8a6a9b392/",
        },
    ],
    about_title: "Who I Am",
    about: &[
        "I hold a Diploma in Chemical Engineering degree from GTU and have a strong background \
         in plant operations and process engineering. Currently, I work as a Field Executive at \
         Reliance Industries Limited, where I have hands-on experience in polypropylene \
         manufacturing and process safety.",
        "I began my career as a Diploma Engineering Trainee, gaining practical exposure to \
         polymerization processes, plant operations, and downstream activities. I was promoted \
         to Field Executive within a year due to consistent performance and a strong commitment \
         to safety.",
        "With a safety-first mindset and a zero-incident record, I focus on ensuring smooth \
         production operations while maintaining the highest HSE standards.",
    ],
    highlights: &[
        Card {
            icon: "■",
            title: "Plant Operations",
            desc: "Polypropylene manufacturing",
        },
        Card {
            icon: "◆",
            title: "Safety First",
            desc: "Zero-incident record",
        },
        Card {
            icon: "⚙",
            title: "Troubleshooting",
            desc: "Equipment & process",
        },
        Card {
            icon: "↗",
            title: "Process Optimization",
            desc: "Efficiency & quality",
        },
    ],
    jobs: &[
        Job {
            title: "Field Executive",
            company: "Reliance Industries Limited (RIL)",
            tenure: Tenure {
                start: YearMonth::new(2023, 9),
                end: None,
            },
            points: &[
                "Taking ownership of day-to-day plant operations, field monitoring, and \
                 coordination with control room to ensure smooth and safe production",
                "Gained hands-on exposure to troubleshooting and equipment checks, supporting \
                 maintenance teams and minimizing production interruptions",
                "Practiced a strong safety-first approach, actively adhering to HSE standards and \
                 fostering a disciplined work culture during shifts",
                "Collaborated closely with senior engineers and cross-functional teams, \
                 contributing to production targets while steadily growing into a more \
                 responsible role",
            ],
            tags: &[
                "Plant Operations",
                "Field Monitoring",
                "Process Troubleshooting",
                "HSE Compliance",
                "Team Coordination",
            ],
        },
        Job {
            title: "Diploma Engineer Trainee (DET)",
            company: "Reliance Industries Limited (RIL)",
            tenure: Tenure {
                start: YearMonth::new(2023, 9),
                end: Some(YearMonth::new(2024, 9)),
            },
            points: &[
                "Completed comprehensive training program building a strong foundation in \
                 polypropylene manufacturing",
                "Learned polymerization processes, plant operations, and downstream activities",
                "Gained exposure to equipment handling, process monitoring, and safety protocols",
                "Promoted to Field Executive within one year for consistent performance",
            ],
            tags: &[
                "Polymerization",
                "Plant Training",
                "Equipment Handling",
                "Safety Protocols",
            ],
        },
    ],
    achievements: &[
        Card {
            icon: "★",
            title: "Promoted Within a Year",
            desc: "From DET to Field Executive for consistent performance",
        },
        Card {
            icon: "◆",
            title: "Zero-Incident Record",
            desc: "Maintained perfect safety record during all assigned shifts",
        },
        Card {
            icon: "⚙",
            title: "Shutdown Operations",
            desc: "Assisted in critical shutdown and startup operations",
        },
    ],
    skills: &[
        SkillGroup {
            title: "Technical Skills",
            skills: &[
                "Plant Operations",
                "Material Balance",
                "Heat & Mass Transfer",
                "Process Troubleshooting",
                "MS Excel",
            ],
        },
        SkillGroup {
            title: "Professional Skills",
            skills: &[
                "HSE Practices",
                "Equipment Handling",
                "Cost Awareness",
                "Preventive Maintenance",
                "Team Collaboration",
            ],
        },
        SkillGroup {
            title: "Soft Skills",
            skills: &[
                "Problem-Solving",
                "Adaptability",
                "Communication",
                "Time Management",
                "Discipline",
            ],
        },
    ],
    specialty: Card {
        icon: "●",
        title: "Petrochemical Expertise",
        desc: "Specialized in polypropylene manufacturing processes, polymerization, plant \
               operations, and downstream activities at Reliance Industries Limited - one of \
               the world's largest petrochemical facilities.",
    },
    project: Project {
        title: "Manufacturing Process of KCN (Potassium Cyanide)",
        period: "January 2023 - May 2023",
        summary: "Comprehensive final year project involving detailed process design, material \
                  balance modeling, and techno-economic analysis of Potassium Cyanide \
                  manufacturing routes. The project demonstrated advanced understanding of \
                  chemical process engineering principles and industrial feasibility assessment.",
        phases: &[
            Card {
                icon: "◔",
                title: "Material Balance Models",
                desc: "Developed comprehensive models ensuring accurate representation of \
                       process flows and mass distribution across alternative manufacturing \
                       routes",
            },
            Card {
                icon: "↗",
                title: "Techno-Economic Evaluation",
                desc: "Performed detailed evaluations integrating cost estimation with process \
                       efficiency to assess industrial feasibility and long-term viability",
            },
            Card {
                icon: "◎",
                title: "Process Optimization",
                desc: "Critically analyzed and selected optimal process design, balancing \
                       technical performance, economic sustainability, and stringent safety \
                       considerations",
            },
        ],
        tags: &[
            "Material Balance",
            "Process Design",
            "Cost Estimation",
            "Safety Analysis",
            "Process Optimization",
            "Techno-Economic Analysis",
        ],
    },
    education: &[
        Education {
            title: "Diploma in Chemical Engineering",
            board: "Gujarat Technological University (GTU)",
            school: "N.G. Patel Polytechnic",
            location: "Gujarat, India",
            years: "2020 - 2023",
            grade: Some("8.18 CGPA"),
            completed: true,
        },
        Education {
            title: "Secondary School Certificate (SSC)",
            board: "Gujarat Secondary Education Board (GSEB)",
            school: "Reliance Foundation School",
            location: "Jamnagar, Gujarat",
            years: "2020",
            grade: Some("70.66%"),
            completed: false,
        },
    ],
    professional_interests: &[
        Card {
            icon: "▸",
            title: "Petrochemical Technology",
            desc: "Deep interest in petrochemical processes and polymer manufacturing",
        },
        Card {
            icon: "▸",
            title: "Process Safety",
            desc: "Passionate about implementing and improving safety protocols",
        },
        Card {
            icon: "▸",
            title: "Polymer Processing",
            desc: "Specialized focus on polymer production and processing techniques",
        },
    ],
    hobbies: &[
        Card {
            icon: "🏀",
            title: "Basketball",
            desc: "Enjoy playing basketball for fitness and teamwork",
        },
        Card {
            icon: "💪",
            title: "Gym Enthusiast",
            desc: "Regular gym workouts to maintain physical and mental fitness",
        },
        Card {
            icon: "✈",
            title: "Travel",
            desc: "Exploring new places and experiencing different cultures",
        },
    ],
    contact_blurb: "I'm always open to discussing new opportunities, projects, or \
                    collaborations in the chemical engineering and petrochemical industry.",
    footer: "© 2026 Ayush S. Patel - Chemical Engineering Professional",
};
