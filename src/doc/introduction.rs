/*!
# Introductory Tutorial

Run the executable from a terminal. There is no banner and no `READY.`;
just start typing. Type CTRL-D or `QUIT` to leave.

A line without a number is a statement in direct mode. It runs as soon
as you press ENTER.

<pre><code>&nbsp;> PRINT 2 + 3 * 4
&nbsp;  14
</code></pre>

Every value is a 32-bit signed integer. Division truncates toward zero
and dividing by zero is an error. Multiplication and division bind tighter
than addition and subtraction; use parentheses to change that.

<pre><code>&nbsp;> PRINT (2 + 3) * 4
&nbsp;  20
&nbsp;> PRINT 7 / 2
&nbsp;  3
&nbsp;> PRINT 1 / 0
&nbsp;  DIVIDE BY ZERO
</code></pre>

Variables spring into existence when first assigned. Reading one
that was never assigned is an error.

<pre><code>&nbsp;> LET A = 5
&nbsp;> PRINT A * 2
&nbsp;  10
&nbsp;> PRINT B
&nbsp;  VARIABLE NOT DEFINED
</code></pre>

Precede a statement with a line number between 0 and 65529 and it is
stored in the program instead. Type a line number alone to delete a line.
Typing a number that is already used replaces that line.

<pre><code>&nbsp;> 10 LET N = 3
&nbsp;> 20 PRINT N
&nbsp;> 30 LET N = N - 1
&nbsp;> 40 IF N > 0 THEN 20
&nbsp;> LIST
&nbsp;  10 LET N = 3
&nbsp;  20 PRINT N
&nbsp;  30 LET N = N - 1
&nbsp;  40 IF N > 0 THEN 20
&nbsp;> RUN
&nbsp;  3
&nbsp;  2
&nbsp;  1
</code></pre>

`GOTO` and `IF` only make sense inside a program. `RUN`, `LIST`, `CLEAR`,
`QUIT` and `HELP` only make sense typed directly. Using them the other
way is a `SYNTAX ERROR`.

An error stops the program and leaves variables intact so you can
inspect them. `CLEAR` erases both the program and the variables.

*/
