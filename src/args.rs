// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::VERSION;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BackpressureArg {
    /// キューが空くまで待つ
    #[default]
    Block,
    /// 満杯なら即座に拒否する
    Reject,
}

#[derive(Parser, Debug)]
#[command(name = "codestat", version = VERSION, about = "ソースコードの行分類と複雑度の集計ツール")]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 走査するパス（省略時はカレントディレクトリ）
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// ワーカースレッド数（省略時は CPU 数）
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,

    /// ジョブキューの容量（省略時はワーカー数 × 4）
    #[arg(long)]
    pub queue_capacity: Option<usize>,

    /// キュー満杯時の動作
    #[arg(long, value_enum, default_value = "block")]
    pub backpressure: BackpressureArg,

    /// 複雑度を計算しない
    #[arg(long)]
    pub no_complexity: bool,

    /// バイナリファイルも行数に含める
    #[arg(long)]
    pub count_binary: bool,

    /// ファイルごとの結果も出力する
    #[arg(long)]
    pub per_file: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// 追加の言語定義 (JSON)
    #[arg(long, value_name = "FILE")]
    pub languages: Option<PathBuf>,

    /// 隠しファイルも対象にする
    #[arg(long)]
    pub hidden: bool,

    /// .gitignore を無視する
    #[arg(long)]
    pub no_ignore: bool,

    /// 最大探索深さ
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// このサイズ (bytes) を超えるファイルをスキップする
    #[arg(long)]
    pub max_file_size: Option<u64>,

    /// シンボリックリンクをたどる
    #[arg(long)]
    pub follow_links: bool,

    /// ログを詳細にする (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
