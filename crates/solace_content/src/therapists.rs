//! Therapist directory and the static referral resource sections.

use solace_core::{ResourceLink, ResourceSection, Therapist};

struct TherapistEntry {
    id: &'static str,
    name: &'static str,
    title: &'static str,
    specialties: &'static [&'static str],
    approach: &'static str,
    education: &'static str,
    practice: &'static str,
    address: &'static str,
    online: bool,
    phone: &'static str,
    email: &'static str,
    website: &'static str,
    insurance: &'static str,
    languages: &'static [&'static str],
    years_experience: u32,
    session_format: &'static str,
    session_cost: &'static str,
}

impl TherapistEntry {
    fn to_therapist(&self) -> Therapist {
        Therapist {
            id: self.id.to_string(),
            name: self.name.to_string(),
            title: self.title.to_string(),
            specialties: self.specialties.iter().map(|s| s.to_string()).collect(),
            approach: self.approach.to_string(),
            education: self.education.to_string(),
            practice: self.practice.to_string(),
            address: self.address.to_string(),
            online: self.online,
            phone: self.phone.to_string(),
            email: self.email.to_string(),
            website: self.website.to_string(),
            insurance: self.insurance.to_string(),
            languages: self.languages.iter().map(|s| s.to_string()).collect(),
            years_experience: self.years_experience,
            session_format: self.session_format.to_string(),
            session_cost: self.session_cost.to_string(),
        }
    }
}

pub(crate) fn therapists() -> Vec<Therapist> {
    DIRECTORY.iter().map(TherapistEntry::to_therapist).collect()
}

pub(crate) fn referral_resources() -> Vec<ResourceSection> {
    let crisis = CRISIS_LINES
        .iter()
        .map(|(name, contact, website)| ResourceLink {
            name: name.to_string(),
            detail: format!("{contact} | {website}"),
        })
        .collect();
    vec![
        ResourceSection {
            heading: "Crisis Support (Available 24/7)".to_string(),
            links: crisis,
        },
        section("Find More Therapists", ONLINE_DIRECTORIES, false),
        section("Online Therapy Platforms", TELEHEALTH_PLATFORMS, false),
        section("Specialized Mental Health Resources", SPECIALIZED_RESOURCES, true),
    ]
}

fn section(heading: &str, rows: &[(&str, &str, &str)], describe: bool) -> ResourceSection {
    ResourceSection {
        heading: heading.to_string(),
        links: rows
            .iter()
            .map(|(name, website, description)| ResourceLink {
                name: name.to_string(),
                detail: if describe {
                    format!("{website} - {description}")
                } else {
                    website.to_string()
                },
            })
            .collect(),
    }
}

const DIRECTORY: &[TherapistEntry] = &[
    TherapistEntry {
        id: "jennifer-reynolds",
        name: "Dr. Jennifer Reynolds",
        title: "Licensed Clinical Psychologist, Ph.D.",
        specialties: &[
            "Anxiety Disorders",
            "Depression",
            "Trauma Recovery",
            "PTSD",
            "Stress Management",
        ],
        approach: "Cognitive Behavioral Therapy (CBT), EMDR, Mindfulness-Based Cognitive Therapy",
        education: "Ph.D. Clinical Psychology, Columbia University; Postdoctoral Fellowship, NYU Langone Medical Center",
        practice: "Mindful Healing Center",
        address: "1270 Avenue of the Americas, Suite 1505, New York, NY 10020",
        online: true,
        phone: "(212) 555-7890",
        email: "dr.reynolds@mindfulhealingcenter.com",
        website: "www.mindfulhealingcenter.com/dr-reynolds",
        insurance: "In-network with Blue Cross Blue Shield, Aetna, United Healthcare, Cigna; Out-of-network benefits available",
        languages: &["English", "French"],
        years_experience: 15,
        session_format: "Individual therapy (50 min), Extended sessions (80 min), Group therapy",
        session_cost: "$200-250 (individual), sliding scale available",
    },
    TherapistEntry {
        id: "marcus-chen",
        name: "Dr. Marcus Chen, M.D.",
        title: "Board-Certified Psychiatrist",
        specialties: &[
            "Medication Management",
            "Treatment-Resistant Depression",
            "Bipolar Disorder",
            "Anxiety Disorders",
            "ADHD",
        ],
        approach: "Integrative Psychiatry, Psychopharmacology, Supportive Psychotherapy, TMS Therapy",
        education: "M.D. Stanford University School of Medicine; Residency, UCSF Medical Center",
        practice: "Bay Area Psychiatric Associates",
        address: "450 Sutter Street, Suite 840, San Francisco, CA 94108",
        online: true,
        phone: "(415) 555-3421",
        email: "dr.chen@bayareapsychiatry.com",
        website: "www.bayareapsychiatry.com",
        insurance: "In-network with Anthem Blue Cross, Cigna, Aetna; Medicare accepted",
        languages: &["English", "Mandarin", "Cantonese"],
        years_experience: 12,
        session_format: "Psychiatric evaluation (60 min), Medication follow-up (30 min)",
        session_cost: "$350 (initial evaluation), $175 (follow-up)",
    },
    TherapistEntry {
        id: "sophia-rodriguez",
        name: "Sophia Rodriguez, LMFT",
        title: "Licensed Marriage and Family Therapist",
        specialties: &[
            "Couples Therapy",
            "Relationship Issues",
            "Premarital Counseling",
            "Divorce Recovery",
            "Family Systems",
        ],
        approach: "Emotionally Focused Therapy (EFT), Gottman Method (Level 3 Trained), Attachment-Based Therapy",
        education: "M.A. in Clinical Psychology, Pepperdine University; Certified EFT Therapist",
        practice: "Relationship Renewal Center",
        address: "11500 W. Olympic Blvd, Suite 400, Los Angeles, CA 90064",
        online: true,
        phone: "(310) 555-9876",
        email: "sophia@relationshiprenewal.com",
        website: "www.relationshiprenewal.com",
        insurance: "Out-of-network provider, superbills provided for reimbursement, sliding scale available",
        languages: &["English", "Spanish"],
        years_experience: 9,
        session_format: "Couples sessions (80 min), Individual sessions (50 min), Intensive couples retreats",
        session_cost: "$225 (couples), $175 (individual)",
    },
    TherapistEntry {
        id: "jamal-washington",
        name: "Dr. Jamal Washington",
        title: "Clinical Psychologist, Addiction Specialist",
        specialties: &[
            "Substance Use Disorders",
            "Alcohol Addiction",
            "Dual Diagnosis",
            "Recovery Maintenance",
            "Process Addictions",
        ],
        approach: "Motivational Interviewing, CBT for Addiction, Harm Reduction, Relapse Prevention, 12-Step Facilitation",
        education: "Psy.D. Clinical Psychology, Chicago School of Professional Psychology; Certified Addiction Professional",
        practice: "Recovery Pathways Institute",
        address: "211 E. Ontario Street, Suite 1100, Chicago, IL 60611",
        online: true,
        phone: "(312) 555-4567",
        email: "dr.washington@recoverypathways.org",
        website: "www.recoverypathways.org",
        insurance: "In-network with Blue Cross Blue Shield, Cigna, Humana, Magellan",
        languages: &["English"],
        years_experience: 18,
        session_format: "Individual therapy (50 min), Intensive outpatient program, Group therapy",
        session_cost: "$185 (individual), Insurance copay varies",
    },
    TherapistEntry {
        id: "priya-sharma",
        name: "Dr. Priya Sharma",
        title: "Neuropsychologist & Clinical Psychologist",
        specialties: &[
            "Neuropsychological Assessment",
            "ADHD",
            "Learning Disabilities",
            "Cognitive Rehabilitation",
            "Executive Functioning",
        ],
        approach: "Comprehensive Neuropsychological Testing, Evidence-Based Interventions, Cognitive-Behavioral Therapy",
        education: "Ph.D. Clinical Psychology, Boston University; Fellowship in Neuropsychology, Massachusetts General Hospital",
        practice: "Cognitive Health Partners",
        address: "1330 Boylston Street, Suite 500, Boston, MA 02215",
        online: false,
        phone: "(617) 555-2345",
        email: "dr.sharma@cognitivehealthpartners.com",
        website: "www.cognitivehealthpartners.com",
        insurance: "In-network with Blue Cross Blue Shield, Harvard Pilgrim, Tufts; Out-of-network benefits available",
        languages: &["English", "Hindi", "Punjabi"],
        years_experience: 14,
        session_format: "Comprehensive neuropsychological assessment (6-8 hours), Feedback sessions (60 min), Therapy sessions (45 min)",
        session_cost: "$2,800-3,500 (full assessment), $200 (therapy session)",
    },
    TherapistEntry {
        id: "david-kim",
        name: "David Kim, LCSW",
        title: "Licensed Clinical Social Worker, Trauma Specialist",
        specialties: &[
            "Complex Trauma",
            "PTSD",
            "Grief and Loss",
            "Cultural Identity",
            "Intergenerational Trauma",
        ],
        approach: "EMDR, Somatic Experiencing, Internal Family Systems, Trauma-Focused CBT, Culturally-Responsive Care",
        education: "MSW, University of Washington; Certified EMDR Therapist; Somatic Experiencing Practitioner",
        practice: "Healing Pathways Trauma Center",
        address: "1700 7th Avenue, Suite 2100, Seattle, WA 98101",
        online: true,
        phone: "(206) 555-7654",
        email: "david@healingpathways.net",
        website: "www.healingpathways.net",
        insurance: "In-network with Premera, Regence, Kaiser Permanente; Sliding scale available",
        languages: &["English", "Korean"],
        years_experience: 11,
        session_format: "Individual therapy (50 min), EMDR sessions (80 min), Group therapy",
        session_cost: "$150-180 (individual), sliding scale $90-140",
    },
    TherapistEntry {
        id: "gabriela-morales",
        name: "Dr. Gabriela Morales",
        title: "Child & Adolescent Psychologist",
        specialties: &[
            "Child Development",
            "Adolescent Mental Health",
            "Anxiety in Children",
            "Behavioral Issues",
            "Parenting Support",
        ],
        approach: "Play Therapy, Cognitive-Behavioral Therapy for Children, Parent-Child Interaction Therapy, Family Systems",
        education: "Ph.D. Child Clinical Psychology, University of Denver; Internship, Children's Hospital Colorado",
        practice: "Growing Minds Child Psychology Center",
        address: "950 S. Cherry Street, Suite 1030, Denver, CO 80246",
        online: true,
        phone: "(303) 555-8765",
        email: "dr.morales@growingminds.org",
        website: "www.growingminds.org",
        insurance: "In-network with Anthem Blue Cross, United Healthcare, Aetna, Cigna",
        languages: &["English", "Spanish"],
        years_experience: 13,
        session_format: "Child therapy (45 min), Parent consultations (50 min), Family sessions (60 min)",
        session_cost: "$175 (individual), $200 (family)",
    },
    TherapistEntry {
        id: "richard-thompson",
        name: "Dr. Richard Thompson",
        title: "Geriatric Psychiatrist & Neuropsychiatrist",
        specialties: &[
            "Geriatric Mental Health",
            "Neurocognitive Disorders",
            "Late-life Depression",
            "Anxiety in Older Adults",
            "Caregiver Support",
        ],
        approach: "Integrative Geriatric Psychiatry, Medication Management, Supportive Therapy, Family Consultation",
        education: "M.D. Emory University School of Medicine; Fellowship in Geriatric Psychiatry, Johns Hopkins",
        practice: "Senior Wellness Psychiatric Clinic",
        address: "2200 Peachtree Road NW, Suite 250, Atlanta, GA 30309",
        online: true,
        phone: "(404) 555-3210",
        email: "dr.thompson@seniorwellnessclinic.com",
        website: "www.seniorwellnessclinic.com",
        insurance: "Medicare, Aetna Medicare, Humana Medicare, Blue Cross Blue Shield Medicare Advantage",
        languages: &["English"],
        years_experience: 25,
        session_format: "Psychiatric evaluation (60 min), Medication management (30 min), Family consultations (45 min)",
        session_cost: "Medicare rates, most patients pay only copay with accepted insurance",
    },
    TherapistEntry {
        id: "zara-jackson",
        name: "Zara Jackson, LPC",
        title: "Licensed Professional Counselor, Women's Health Specialist",
        specialties: &[
            "Women's Mental Health",
            "Reproductive Mental Health",
            "Trauma Recovery",
            "Racial Identity",
            "Self-Esteem",
        ],
        approach: "Feminist Therapy, Trauma-Informed Care, Strengths-Based Approach, Mindfulness, ACT",
        education: "M.A. Clinical Mental Health Counseling, University of Houston; Certified in Perinatal Mental Health",
        practice: "Women's Healing Collective",
        address: "3700 Buffalo Speedway, Suite 600, Houston, TX 77098",
        online: true,
        phone: "(713) 555-9087",
        email: "zara@womenshealingcollective.com",
        website: "www.womenshealingcollective.com",
        insurance: "Out-of-network provider, superbills provided, sliding scale available",
        languages: &["English"],
        years_experience: 8,
        session_format: "Individual therapy (50 min), Women's support groups, Workshops",
        session_cost: "$165 (individual), sliding scale $95-145, group rates vary",
    },
    TherapistEntry {
        id: "noah-goldstein",
        name: "Dr. Noah Goldstein",
        title: "Clinical Psychologist, Anxiety & OCD Specialist",
        specialties: &[
            "OCD",
            "Panic Disorder",
            "Social Anxiety",
            "Phobias",
            "Generalized Anxiety Disorder",
        ],
        approach: "Exposure and Response Prevention (ERP), Acceptance and Commitment Therapy (ACT), Cognitive-Behavioral Therapy",
        education: "Psy.D. Clinical Psychology, Widener University; OCD Foundation Behavior Therapy Training Institute Graduate",
        practice: "Anxiety Treatment Center of Philadelphia",
        address: "1845 Walnut Street, Suite 1300, Philadelphia, PA 19103",
        online: true,
        phone: "(215) 555-6543",
        email: "dr.goldstein@anxietyspecialists.com",
        website: "www.anxietyspecialists.com",
        insurance: "In-network with Independence Blue Cross, Aetna, Cigna, United Healthcare",
        languages: &["English", "Hebrew"],
        years_experience: 16,
        session_format: "Individual therapy (50 min), Intensive outpatient treatment, Group therapy",
        session_cost: "$190 (individual), Insurance copay varies",
    },
];

const CRISIS_LINES: &[(&str, &str, &str)] = &[
    ("988 Suicide & Crisis Lifeline", "Call or text 988", "988lifeline.org"),
    ("Crisis Text Line", "Text HOME to 741741", "crisistextline.org"),
    ("SAMHSA's National Helpline", "1-800-662-HELP (4357)", "samhsa.gov/find-help/national-helpline"),
    ("Veterans Crisis Line", "Call 988, then press 1, or text 838255", "veteranscrisisline.net"),
    ("Trevor Project (LGBTQ+ Youth)", "1-866-488-7386 or text START to 678678", "thetrevorproject.org"),
];

const ONLINE_DIRECTORIES: &[(&str, &str, &str)] = &[
    ("Psychology Today Therapist Directory", "psychologytoday.com/us/therapists", "Comprehensive database of therapists searchable by location, specialty, insurance, and more."),
    ("Therapy for Black Girls Directory", "therapyforblackgirls.com/therapist-directory", "Find culturally competent therapists for Black women and girls."),
    ("Inclusive Therapists", "inclusivetherapists.com", "Directory focused on culturally responsive, social justice-oriented care."),
    ("Asian Mental Health Collective", "asianmhc.org/therapist-directory", "Directory of AAPI therapists and therapists experienced in AAPI issues."),
    ("National Queer and Trans Therapists of Color Network", "nqttcn.com/directory", "Directory of queer and trans therapists of color."),
    ("Open Path Psychotherapy Collective", "openpathcollective.org", "Affordable therapy options ($30-60 per session) for individuals, couples, and families."),
];

const TELEHEALTH_PLATFORMS: &[(&str, &str, &str)] = &[
    ("BetterHelp", "betterhelp.com", "Online counseling platform with over 25,000 licensed therapists, starting at $60-$90 per week."),
    ("Talkspace", "talkspace.com", "Text, audio, and video therapy with licensed providers, starting at $69 per week."),
    ("Alma", "helloalma.com", "Network of therapists with in-person and virtual options, many accepting insurance."),
    ("Cerebral", "cerebral.com", "Online mental health care with therapy and medication management options."),
    ("Headway", "headway.co", "Platform connecting patients with therapists who accept insurance, with transparent pricing."),
];

const SPECIALIZED_RESOURCES: &[(&str, &str, &str)] = &[
    ("National Alliance on Mental Illness (NAMI)", "nami.org", "Advocacy, education, support and public awareness for individuals and families affected by mental illness."),
    ("Mental Health America", "mhanational.org", "Community-based nonprofit offering resources, tools, and support for mental health."),
    ("Anxiety and Depression Association of America", "adaa.org", "Information, resources, and support for anxiety, depression, and related disorders."),
    ("Postpartum Support International", "postpartum.net", "Resources for pregnancy and postpartum mental health, including a helpline: 1-800-944-4773."),
    ("International OCD Foundation", "iocdf.org", "Resources, support groups, and treatment provider directory for OCD and related disorders."),
];
