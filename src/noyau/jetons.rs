// src/noyau/jetons.rs

/// Arité d’un opérateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Unaire,
    Binaire,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,     // ^
    Percent, // a % b = a × (b/100)
    Sqrt,    // √ (préfixe)
    Neg,     // moins unaire (préfixe)
}

impl Op {
    /// 1: `+ -` ; 2: `* / %` ; 3: `^ √ neg`.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div | Op::Percent => 2,
            Op::Pow | Op::Sqrt | Op::Neg => 3,
        }
    }

    pub fn arite(self) -> Arite {
        match self {
            Op::Sqrt | Op::Neg => Arite::Unaire,
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pow | Op::Percent => Arite::Binaire,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
            Op::Percent => "%",
            Op::Sqrt => "sqrt",
            Op::Neg => "neg",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Texte brut : la conversion en f64 se fait à l’évaluation
    // (un "1.2.3" ne casse qu’à ce moment-là).
    Num(String),
    Op(Op),
    LPar,
    RPar,
}

impl Tok {
    /// Le `-` qui suit ce jeton est-il un moins unaire ?
    fn ouvre_operande(&self) -> bool {
        matches!(self, Tok::LPar | Tok::Op(_))
    }
}

/// Tokenize une chaîne déjà assainie (voir `assainir::sanitize`).
///
/// - suite de chiffres et de `.` -> un seul `Num` (texte non validé)
/// - `+ * / ^ % ( )` -> opérateur / parenthèse
/// - `-` -> `Neg` si premier jeton, ou après `(` ou un opérateur ; sinon `Sub`
/// - `√` -> `Sqrt`
/// - tout le reste est ignoré silencieusement
///
/// Une seule passe, jamais d’erreur.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre : chiffres et points, tels quels
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Op(Op::Add)),
            '*' => Some(Tok::Op(Op::Mul)),
            '/' => Some(Tok::Op(Op::Div)),
            '^' => Some(Tok::Op(Op::Pow)),
            '%' => Some(Tok::Op(Op::Percent)),
            '√' => Some(Tok::Op(Op::Sqrt)),
            '-' => {
                let unaire = out.last().map_or(true, Tok::ouvre_operande);
                Some(Tok::Op(if unaire { Op::Neg } else { Op::Sub }))
            }
            // inconnu : ignoré
            _ => None,
        };

        if let Some(t) = tok {
            out.push(t);
        }
        i += 1;
    }

    out
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(txt) => txt.as_str(),
            Tok::Op(op) => op.symbole(),
            Tok::LPar => "(",
            Tok::RPar => ")",
        };
        out.push(s);
    }
    out.join(" ")
}
