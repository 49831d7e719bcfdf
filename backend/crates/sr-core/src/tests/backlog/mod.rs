mod backlog_filter;
mod backlog_sort;
