//! LaTeX résumé template.

/// Preamble of the Sourabh Bajaj résumé template, up to `\begin{document}`.
const BAJAJ_PREAMBLE: &str = r"\documentclass[letterpaper,11pt]{article}

\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{verbatim}
\usepackage{enumitem}
\usepackage{hyperref}
\usepackage{fancyhdr}

\pagestyle{fancy}
\fancyhf{}
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

\addtolength{\oddsidemargin}{-0.375in}
\addtolength{\evensidemargin}{-0.375in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.5in}
\addtolength{\textheight}{1.0in}

\urlstyle{same}
\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

\titleformat{\section}{
  \vspace{-4pt}\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \vspace{-5pt}]

\newcommand{\resumeSubheading}[4]{
  \vspace{-1pt}\item
    \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
      \textit{\small#3} & \textit{\small #4} \\
    \end{tabular*}\vspace{-5pt}
}

\renewcommand{\labelitemii}{$\circ$}

\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=*]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}

\setlength{\footskip}{4.08003pt}
\begin{document}
";

const BAJAJ_TRAILER: &str = r"\end{document}";

/// Static text wrapped around the converted body.
#[derive(Clone, Copy, Debug)]
pub struct ResumeTemplate {
    /// Everything before the body, ending with `\begin{document}`.
    pub preamble: &'static str,
    /// Everything after the body.
    pub trailer: &'static str,
}

impl Default for ResumeTemplate {
    fn default() -> Self {
        Self::BAJAJ
    }
}

impl ResumeTemplate {
    /// The Sourabh Bajaj article template.
    pub const BAJAJ: Self = Self {
        preamble: BAJAJ_PREAMBLE,
        trailer: BAJAJ_TRAILER,
    };

    /// Join preamble, body lines and trailer with newlines.
    pub fn assemble(&self, body: &[String]) -> String {
        let body_len: usize = body.iter().map(|line| line.len() + 1).sum();
        let mut doc =
            String::with_capacity(self.preamble.len() + body_len + self.trailer.len() + 1);
        doc.push_str(self.preamble);
        for line in body {
            doc.push('\n');
            doc.push_str(line);
        }
        doc.push('\n');
        doc.push_str(self.trailer);
        doc
    }
}
