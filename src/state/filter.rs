/// Normalized filter query handed to the API client.
///
/// `None` means "no constraint". Empty strings never appear here: a server
/// could read an empty-string filter as "match empty string" rather than
/// "unconstrained". `min_exp` of zero is a real constraint and is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub keyword: Option<String>,
    pub city: Option<String>,
    pub degree: Option<String>,
    pub skill: Option<String>,
    pub min_exp: Option<u32>,
}

impl FilterQuery {
    pub fn is_empty(&self) -> bool {
        self.keyword.is_none()
            && self.city.is_none()
            && self.degree.is_none()
            && self.skill.is_none()
            && self.min_exp.is_none()
    }

    /// Query parameters, defined values only.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(keyword) = &self.keyword {
            params.push(("keyword", keyword.clone()));
        }
        if let Some(city) = &self.city {
            params.push(("city", city.clone()));
        }
        if let Some(degree) = &self.degree {
            params.push(("degree", degree.clone()));
        }
        if let Some(skill) = &self.skill {
            params.push(("skill", skill.clone()));
        }
        if let Some(min_exp) = self.min_exp {
            params.push(("min_exp", min_exp.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No filters applied, nothing typed.
    Idle,
    /// At least one field touched since the last submit.
    Editing,
    /// The last submission is the active query.
    Applied,
}

/// Transient filter form input. Fields hold raw user text; normalization
/// happens once, on submit.
#[derive(Debug, Clone)]
pub struct FilterForm {
    keyword: String,
    city: String,
    degree: String,
    skill: String,
    min_exp: String,
    phase: FormPhase,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            city: String::new(),
            degree: String::new(),
            skill: String::new(),
            min_exp: String::new(),
            phase: FormPhase::Idle,
        }
    }
}

impl FilterForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn degree(&self) -> &str {
        &self.degree
    }

    pub fn skill(&self) -> &str {
        &self.skill
    }

    pub fn min_exp(&self) -> &str {
        &self.min_exp
    }

    pub fn set_keyword(&mut self, value: String) {
        self.keyword = value;
        self.touch();
    }

    pub fn set_city(&mut self, value: String) {
        self.city = value;
        self.touch();
    }

    pub fn set_degree(&mut self, value: String) {
        self.degree = value;
        self.touch();
    }

    pub fn set_skill(&mut self, value: String) {
        self.skill = value;
        self.touch();
    }

    pub fn set_min_exp(&mut self, value: String) {
        self.min_exp = value;
        self.touch();
    }

    fn touch(&mut self) {
        self.phase = FormPhase::Editing;
    }

    /// Normalize every field and mark the form applied. Whitespace-only
    /// input becomes `None`, never an empty string.
    pub fn submit(&mut self) -> FilterQuery {
        self.phase = FormPhase::Applied;
        FilterQuery {
            keyword: normalize(&self.keyword),
            city: normalize(&self.city),
            degree: normalize(&self.degree),
            skill: normalize(&self.skill),
            min_exp: self.min_exp.trim().parse().ok(),
        }
    }

    /// Reset every field and return the empty query that restores the full
    /// view.
    pub fn clear(&mut self) -> FilterQuery {
        *self = Self::default();
        FilterQuery::default()
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
