//! Keyword taxonomy and first-match classification of document ids.

use serde::{Deserialize, Serialize};

use super::DocumentId;

/// Current revision of the built-in keyword vocabulary.
pub const BUILTIN_TAXONOMY_VERSION: u32 = 1;

/// Fixed technology categories, in declared evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Frontend,
    Backend,
    Mobile,
    Database,
    Devops,
    Testing,
    AiMl,
    Tools,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Frontend,
        Category::Backend,
        Category::Mobile,
        Category::Database,
        Category::Devops,
        Category::Testing,
        Category::AiMl,
        Category::Tools,
        Category::Other,
    ];

    /// Machine name used in reports and configuration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Mobile => "mobile",
            Category::Database => "database",
            Category::Devops => "devops",
            Category::Testing => "testing",
            Category::AiMl => "ai_ml",
            Category::Tools => "tools",
            Category::Other => "other",
        }
    }

    /// Human label for the console report.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Mobile => "Mobile",
            Category::Database => "Database",
            Category::Devops => "DevOps",
            Category::Testing => "Testing",
            Category::AiMl => "AI/ML",
            Category::Tools => "Tools",
            Category::Other => "Other",
        }
    }

    const fn index(&self) -> usize {
        *self as usize
    }
}

/// Keywords identifying one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTable {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl KeywordTable {
    fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Ordered list of keyword tables. Earlier tables win ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub version: u32,
    pub tables: Vec<KeywordTable>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Taxonomy {
    /// The stock vocabulary for rule corpora.
    pub fn builtin() -> Self {
        let tables = vec![
            KeywordTable::new(
                Category::Frontend,
                &[
                    "react", "vue", "angular", "next-js", "svelte", "nuxt", "remix", "astro",
                    "typescript", "javascript", "css", "sass", "scss", "less", "tailwind",
                    "bootstrap", "material-ui", "ant-design", "chakra-ui", "shadcn", "vite",
                    "webpack", "parcel", "rollup", "esbuild", "redux", "mobx", "zustand",
                    "recoil", "axios", "d3", "three-js", "chart-js",
                ],
            ),
            KeywordTable::new(
                Category::Backend,
                &[
                    "python", "go", "rust", "java", "c-sharp", "php", "ruby", "kotlin", "scala",
                    "fastapi", "django", "flask", "express", "nestjs", "spring", "laravel",
                    "graphql", "apollo-graphql", "trpc", "grpc", "socket-io", "websocket",
                ],
            ),
            KeywordTable::new(
                Category::Mobile,
                &[
                    "react-native", "flutter", "expo", "ionic", "android-sdk", "ios-sdk",
                    "jetpack-compose", "swiftui",
                ],
            ),
            KeywordTable::new(
                Category::Database,
                &[
                    "postgresql", "mysql", "sqlite", "mongodb", "redis", "elasticsearch",
                    "neo4j", "cassandra", "dynamodb", "firestore", "prisma", "drizzle",
                    "sqlalchemy", "django-orm", "typeorm",
                ],
            ),
            KeywordTable::new(
                Category::Devops,
                &[
                    "docker", "kubernetes", "terraform", "ansible", "vagrant", "aws", "azure",
                    "gcp", "cloudflare", "jenkins", "github-actions", "gitlab-ci", "circleci",
                    "nginx", "apache", "traefik",
                ],
            ),
            KeywordTable::new(
                Category::Testing,
                &[
                    "jest", "mocha", "jasmine", "vitest", "cypress", "playwright", "selenium",
                    "puppeteer", "pytest", "unittest", "rspec", "junit",
                ],
            ),
            KeywordTable::new(
                Category::AiMl,
                &[
                    "tensorflow", "pytorch", "keras", "scikit-learn", "huggingface",
                    "transformers", "langchain", "llama-index", "autogen", "crewai", "openai",
                    "anthropic", "pandas", "numpy", "matplotlib", "seaborn", "plotly",
                ],
            ),
            KeywordTable::new(
                Category::Tools,
                &[
                    "git", "svn", "mercurial", "eslint", "prettier", "black", "pylint", "mypy",
                    "babel", "postcss", "autoprefixer", "storybook", "chromatic",
                ],
            ),
        ];

        Self {
            version: BUILTIN_TAXONOMY_VERSION,
            tables,
        }
    }

    /// Check that every non-`other` category appears exactly once with usable keywords.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = [false; Category::ALL.len()];
        for table in &self.tables {
            if table.category == Category::Other {
                return Err("`other` is the fallback category and cannot have keywords".into());
            }
            let slot = &mut seen[table.category.index()];
            if *slot {
                return Err(format!(
                    "category `{}` is listed more than once",
                    table.category.as_str()
                ));
            }
            *slot = true;
            if table.keywords.is_empty() {
                return Err(format!(
                    "category `{}` has no keywords",
                    table.category.as_str()
                ));
            }
            if let Some(bad) = table
                .keywords
                .iter()
                .find(|k| k.trim().is_empty() || k.to_lowercase() != **k)
            {
                return Err(format!(
                    "keyword `{bad}` in `{}` must be non-empty lowercase",
                    table.category.as_str()
                ));
            }
        }

        let missing: Vec<_> = Category::ALL
            .iter()
            .filter(|c| **c != Category::Other && !seen[c.index()])
            .map(|c| c.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(format!("missing categories: {}", missing.join(", ")));
        }
        Ok(())
    }

    /// Category of a single id: first table with a keyword contained in the
    /// lowercased id, else `other`.
    pub fn classify(&self, id: &str) -> Category {
        let lowered = id.to_lowercase();
        self.tables
            .iter()
            .find(|table| table.matches(&lowered))
            .map(|table| table.category)
            .unwrap_or(Category::Other)
    }

    /// Partition `ids` into categories, preserving input order within each.
    pub fn assign<'a>(&self, ids: impl IntoIterator<Item = &'a DocumentId>) -> CategoryAssignment {
        let mut assignment = CategoryAssignment::default();
        for id in ids {
            let category = self.classify(id);
            assignment.buckets[category.index()].push(id.clone());
        }
        assignment
    }
}

/// Every source id mapped to exactly one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAssignment {
    buckets: [Vec<DocumentId>; Category::ALL.len()],
}

impl CategoryAssignment {
    pub fn files(&self, category: Category) -> &[DocumentId] {
        &self.buckets[category.index()]
    }

    /// Categories in declared order with their files.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[DocumentId])> + '_ {
        Category::ALL
            .iter()
            .map(move |c| (*c, self.buckets[c.index()].as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
