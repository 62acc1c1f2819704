use super::super::domain::{
    CareerCluster, Course, CutoffHistory, InstitutionType, ProgramLevel, SalaryRange,
    SubjectRequirement,
};
use super::super::grades::Grade;

struct Entry {
    id: &'static str,
    name: &'static str,
    institution: &'static str,
    institution_type: InstitutionType,
    level: ProgramLevel,
    cluster: CareerCluster,
    cutoffs: (f64, f64, f64),
    requirements: &'static [(&'static str, Grade)],
    cluster_subjects: &'static [&'static str],
    employment_rate: u8,
    salary: (u32, u32),
    career_paths: &'static [&'static str],
    description: &'static str,
    sponsored: bool,
}

impl Entry {
    fn into_course(self) -> Course {
        Course {
            id: self.id.to_string(),
            name: self.name.to_string(),
            institution: self.institution.to_string(),
            institution_type: self.institution_type,
            level: self.level,
            cluster: self.cluster,
            cutoffs: CutoffHistory::new(self.cutoffs.0, self.cutoffs.1, self.cutoffs.2),
            minimum_requirements: self
                .requirements
                .iter()
                .map(|(subject, grade)| SubjectRequirement::new(*subject, *grade))
                .collect(),
            cluster_subjects: self
                .cluster_subjects
                .iter()
                .map(|subject| subject.to_string())
                .collect(),
            employment_rate: self.employment_rate,
            salary_range: SalaryRange {
                min: self.salary.0,
                max: self.salary.1,
            },
            career_paths: self
                .career_paths
                .iter()
                .map(|path| path.to_string())
                .collect(),
            description: self.description.to_string(),
            sponsored: self.sponsored,
        }
    }
}

/// Reference courses shipped with the engine, most recent cutoff first.
pub(super) fn standard_courses() -> Vec<Course> {
    let entries = [
        Entry {
            id: "bsc-cs-uon",
            name: "Bachelor of Science in Computer Science",
            institution: "University of Nairobi",
            institution_type: InstitutionType::University,
            level: ProgramLevel::Degree,
            cluster: CareerCluster::Tech,
            cutoffs: (42.5, 41.8, 40.2),
            requirements: &[
                ("Mathematics", Grade::BPlus),
                ("English", Grade::CPlus),
                ("Physics", Grade::CPlus),
            ],
            cluster_subjects: &["Mathematics", "Physics", "Chemistry"],
            employment_rate: 89,
            salary: (60_000, 250_000),
            career_paths: &[
                "Software Engineer",
                "Data Scientist",
                "Systems Analyst",
                "IT Consultant",
            ],
            description: "Comprehensive program covering software development, algorithms, AI, and systems design.",
            sponsored: true,
        },
        Entry {
            id: "medicine-uon",
            name: "Bachelor of Medicine and Bachelor of Surgery (MBChB)",
            institution: "University of Nairobi",
            institution_type: InstitutionType::University,
            level: ProgramLevel::Degree,
            cluster: CareerCluster::Health,
            cutoffs: (46.8, 46.2, 45.5),
            requirements: &[
                ("Biology", Grade::AMinus),
                ("Chemistry", Grade::AMinus),
                ("Mathematics", Grade::BPlus),
                ("English", Grade::B),
            ],
            cluster_subjects: &["Biology", "Chemistry", "Physics", "Mathematics"],
            employment_rate: 98,
            salary: (150_000, 800_000),
            career_paths: &[
                "Medical Doctor",
                "Surgeon",
                "Specialist Physician",
                "Medical Researcher",
            ],
            description: "Premier medical program producing highly skilled healthcare professionals.",
            sponsored: true,
        },
        Entry {
            id: "bcom-strathmore",
            name: "Bachelor of Commerce",
            institution: "Strathmore University",
            institution_type: InstitutionType::University,
            level: ProgramLevel::Degree,
            cluster: CareerCluster::Business,
            cutoffs: (38.5, 37.9, 36.8),
            requirements: &[("Mathematics", Grade::B), ("English", Grade::B)],
            cluster_subjects: &["Mathematics", "Business Studies", "Economics"],
            employment_rate: 85,
            salary: (50_000, 300_000),
            career_paths: &[
                "Accountant",
                "Financial Analyst",
                "Business Consultant",
                "Bank Manager",
            ],
            description: "Comprehensive business education with focus on finance and accounting.",
            sponsored: false,
        },
        Entry {
            id: "nursing-kmtc",
            name: "Diploma in Kenya Registered Community Health Nursing",
            institution: "KMTC Nairobi",
            institution_type: InstitutionType::Kmtc,
            level: ProgramLevel::Diploma,
            cluster: CareerCluster::Health,
            cutoffs: (32.5, 31.8, 30.5),
            requirements: &[
                ("Biology", Grade::CPlus),
                ("Chemistry", Grade::C),
                ("English", Grade::C),
                ("Mathematics", Grade::C),
            ],
            cluster_subjects: &["Biology", "Chemistry", "Physics"],
            employment_rate: 95,
            salary: (45_000, 120_000),
            career_paths: &[
                "Registered Nurse",
                "Community Health Nurse",
                "Nursing Officer",
                "Healthcare Administrator",
            ],
            description: "Professional nursing program with clinical training in healthcare facilities.",
            sponsored: true,
        },
        Entry {
            id: "electrical-tvet",
            name: "Diploma in Electrical Engineering",
            institution: "Kenya Coast National Polytechnic",
            institution_type: InstitutionType::Tvet,
            level: ProgramLevel::Diploma,
            cluster: CareerCluster::Engineering,
            cutoffs: (28.0, 27.5, 26.8),
            requirements: &[
                ("Mathematics", Grade::C),
                ("Physics", Grade::C),
                ("English", Grade::DPlus),
            ],
            cluster_subjects: &["Mathematics", "Physics", "Chemistry"],
            employment_rate: 82,
            salary: (35_000, 100_000),
            career_paths: &[
                "Electrical Technician",
                "Power Systems Engineer",
                "Maintenance Engineer",
            ],
            description: "Practical training in electrical systems, wiring, and power distribution.",
            sponsored: true,
        },
        Entry {
            id: "actuarial-uon",
            name: "Bachelor of Science in Actuarial Science",
            institution: "University of Nairobi",
            institution_type: InstitutionType::University,
            level: ProgramLevel::Degree,
            cluster: CareerCluster::Business,
            cutoffs: (44.2, 43.5, 42.8),
            requirements: &[("Mathematics", Grade::AMinus), ("English", Grade::B)],
            cluster_subjects: &["Mathematics", "Business Studies", "Economics"],
            employment_rate: 92,
            salary: (80_000, 500_000),
            career_paths: &[
                "Actuary",
                "Risk Analyst",
                "Insurance Consultant",
                "Pension Specialist",
            ],
            description: "Elite program combining mathematics, statistics, and financial theory.",
            sponsored: true,
        },
        Entry {
            id: "law-uon",
            name: "Bachelor of Laws (LLB)",
            institution: "University of Nairobi",
            institution_type: InstitutionType::University,
            level: ProgramLevel::Degree,
            cluster: CareerCluster::Law,
            cutoffs: (43.5, 42.8, 41.5),
            requirements: &[("English", Grade::BPlus), ("Kiswahili", Grade::B)],
            cluster_subjects: &["English", "History", "CRE"],
            employment_rate: 88,
            salary: (70_000, 400_000),
            career_paths: &["Advocate", "State Counsel", "Legal Consultant", "Judge"],
            description: "Rigorous legal education preparing students for the bar examinations.",
            sponsored: true,
        },
        Entry {
            id: "architecture-jkuat",
            name: "Bachelor of Architecture",
            institution: "JKUAT",
            institution_type: InstitutionType::University,
            level: ProgramLevel::Degree,
            cluster: CareerCluster::Engineering,
            cutoffs: (40.5, 39.8, 38.5),
            requirements: &[
                ("Mathematics", Grade::B),
                ("Physics", Grade::B),
                ("English", Grade::CPlus),
            ],
            cluster_subjects: &["Mathematics", "Physics", "Art & Design"],
            employment_rate: 78,
            salary: (60_000, 350_000),
            career_paths: &[
                "Architect",
                "Urban Planner",
                "Interior Designer",
                "Construction Manager",
            ],
            description: "Creative and technical program in building design and urban planning.",
            sponsored: true,
        },
        Entry {
            id: "clinical-medicine-kmtc",
            name: "Diploma in Clinical Medicine and Surgery",
            institution: "KMTC Nairobi",
            institution_type: InstitutionType::Kmtc,
            level: ProgramLevel::Diploma,
            cluster: CareerCluster::Health,
            cutoffs: (35.5, 34.8, 33.5),
            requirements: &[
                ("Biology", Grade::BMinus),
                ("Chemistry", Grade::CPlus),
                ("English", Grade::CPlus),
                ("Mathematics", Grade::C),
            ],
            cluster_subjects: &["Biology", "Chemistry", "Physics"],
            employment_rate: 94,
            salary: (55_000, 150_000),
            career_paths: &[
                "Clinical Officer",
                "Medical Officer",
                "Healthcare Supervisor",
            ],
            description: "Medical training for clinical officers providing primary healthcare.",
            sponsored: true,
        },
        Entry {
            id: "hospitality-tvet",
            name: "Diploma in Food and Beverage Management",
            institution: "Utalii College",
            institution_type: InstitutionType::Tvet,
            level: ProgramLevel::Diploma,
            cluster: CareerCluster::Hospitality,
            cutoffs: (25.0, 24.5, 23.8),
            requirements: &[("English", Grade::C), ("Mathematics", Grade::DPlus)],
            cluster_subjects: &["Home Science", "Business Studies", "English"],
            employment_rate: 80,
            salary: (30_000, 120_000),
            career_paths: &[
                "Hotel Manager",
                "Restaurant Manager",
                "Events Coordinator",
                "Chef",
            ],
            description: "Industry-focused training in hospitality and food service management.",
            sponsored: true,
        },
    ];

    entries.into_iter().map(Entry::into_course).collect()
}
