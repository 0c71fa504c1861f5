use clap::ValueEnum;
use serde::Serialize;

/// Display language for report labels and fatal error messages.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Lang {
  #[default]
  Zh,
  En,
}

/// Fixed label table for one language.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
  pub title: &'static str,
  pub time_range: &'static str,
  pub range_to: &'static str,
  pub search_dir: &'static str,
  pub author_filter: &'static str,
  pub message_filter: &'static str,
  pub project: &'static str,
  pub remote: &'static str,
  pub author: &'static str,
  pub statistics: &'static str,
  pub total_commits: &'static str,
  pub participant_count: &'static str,
  pub participants: &'static str,
  pub type_distribution: &'static str,
  pub no_commits: &'static str,
  pub done: &'static str,
}

const ZH: Messages = Messages {
  title: "工作内容Git提交记录汇总",
  time_range: "统计时间范围",
  range_to: "到",
  search_dir: "搜索目录",
  author_filter: "作者过滤",
  message_filter: "提交信息过滤",
  project: "项目",
  remote: "仓库地址",
  author: "作者",
  statistics: "统计信息",
  total_commits: "总提交数",
  participant_count: "参与人数",
  participants: "参与者",
  type_distribution: "提交类型分布",
  no_commits: "未找到提交记录",
  done: "工作内容汇总完成",
};

const EN: Messages = Messages {
  title: "Git Commit Summary",
  time_range: "Time range",
  range_to: "to",
  search_dir: "Search directory",
  author_filter: "Author filter",
  message_filter: "Message filter",
  project: "Project",
  remote: "Remote",
  author: "author",
  statistics: "Statistics",
  total_commits: "Total commits",
  participant_count: "Participants",
  participants: "Contributors",
  type_distribution: "Commit types",
  no_commits: "No commits found",
  done: "Summary complete",
};

impl Lang {
  pub fn messages(self) -> &'static Messages {
    match self {
      Lang::Zh => &ZH,
      Lang::En => &EN,
    }
  }

  pub fn missing_dir(self, dir: &str) -> String {
    match self {
      Lang::Zh => format!("错误: 目录 '{}' 不存在", dir),
      Lang::En => format!("error: directory '{}' does not exist", dir),
    }
  }

  pub fn unknown_preset(self, preset: &str, valid: &str) -> String {
    match self {
      Lang::Zh => format!("错误: 未知的时间范围预设 '{}' (可选值: {})", preset, valid),
      Lang::En => format!("error: unknown time range preset '{}' (valid: {})", preset, valid),
    }
  }
}
